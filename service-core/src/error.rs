use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// The body could not be read into the target type. `loc` is the path
    /// of the offending field inside the body, empty for the body itself.
    #[error("{message}")]
    InvalidBody {
        status: StatusCode,
        loc: Vec<String>,
        kind: &'static str,
        message: String,
    },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    DatabaseError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidBody { status, .. } => *status,
            AppError::InternalError(_)
            | AppError::DatabaseError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Field-level entry of a 422 response, `{"loc": ["body", field], "msg", "type"}`.
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

pub fn field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut entries: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| FieldError {
                loc: vec!["body".to_string(), field.clone()],
                msg: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", err.code)),
                kind: err.code.to_string(),
            })
        })
        .collect();

    entries.sort_by(|a, b| a.loc.cmp(&b.loc));
    entries
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail: Value = match &self {
            AppError::ValidationError(errs) => json!(field_errors(errs)),
            AppError::InvalidBody {
                loc, kind, message, ..
            } => json!([FieldError {
                loc: std::iter::once("body".to_string())
                    .chain(loc.iter().cloned())
                    .collect(),
                msg: message.clone(),
                kind: kind.to_string(),
            }]),
            AppError::InternalError(err)
            | AppError::DatabaseError(err)
            | AppError::ConfigError(err) => json!(err.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
