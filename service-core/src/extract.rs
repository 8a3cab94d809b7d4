use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and then checked against its
/// `Validate` constraints. Nothing reaches the handler unless both pass.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| AppError::InvalidBody {
                status: e.status(),
                loc: Vec::new(),
                kind: "body_error",
                message: e.body_text(),
            })?;

        let value = deserialize_located::<T>(body)?;
        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Deserialize `body`, reporting the path of the offending field on failure.
/// A missing field is located at the field itself rather than its parent.
pub fn deserialize_located<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_path_to_error::deserialize(body).map_err(|e| {
        let mut loc: Vec<String> = e
            .path()
            .to_string()
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        let message = e.into_inner().to_string();

        let kind = match missing_field(&message) {
            Some(field) => {
                loc.push(field.to_string());
                "missing"
            }
            None => "value_error",
        };

        AppError::InvalidBody {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            loc,
            kind,
            message,
        }
    })
}

fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, http::header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Signup {
        #[validate(length(min = 2))]
        name: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let ValidatedJson(signup) =
            ValidatedJson::<Signup>::from_request(json_request(r#"{"name":"Jo"}"#), &())
                .await
                .unwrap();

        assert_eq!(signup.name, "Jo");
    }

    #[tokio::test]
    async fn rejects_constraint_violation() {
        let err = ValidatedJson::<Signup>::from_request(json_request(r#"{"name":"J"}"#), &())
            .await
            .err()
            .unwrap();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn rejects_missing_field_at_its_location() {
        let err = ValidatedJson::<Signup>::from_request(json_request("{}"), &())
            .await
            .err()
            .unwrap();

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        match err {
            AppError::InvalidBody { loc, kind, .. } => {
                assert_eq!(loc, vec!["name"]);
                assert_eq!(kind, "missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum Mode {
        Fast,
        Slow,
    }

    #[derive(Debug, Deserialize)]
    struct Nested {
        mode: Mode,
    }

    #[test]
    fn unknown_variant_is_located_at_its_field() {
        let err = deserialize_located::<Nested>(serde_json::json!({ "mode": "medium" }))
            .unwrap_err();

        match err {
            AppError::InvalidBody { loc, kind, message, .. } => {
                assert_eq!(loc, vec!["mode"]);
                assert_eq!(kind, "value_error");
                assert!(message.contains("medium"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_object_body_is_located_at_root() {
        let err = deserialize_located::<Nested>(serde_json::json!([1, 2])).unwrap_err();

        match err {
            AppError::InvalidBody { loc, .. } => assert!(loc.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn known_variants_deserialize() {
        let fast: Nested = deserialize_located(serde_json::json!({ "mode": "fast" })).unwrap();
        let slow: Nested = deserialize_located(serde_json::json!({ "mode": "slow" })).unwrap();

        assert!(matches!(fast.mode, Mode::Fast));
        assert!(matches!(slow.mode, Mode::Slow));
    }

    #[tokio::test]
    async fn rejects_malformed_json_as_bad_request() {
        let err = ValidatedJson::<Signup>::from_request(json_request("{"), &())
            .await
            .err()
            .unwrap();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
