use axum::{extract::State, Json};
use serde::Serialize;
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

use crate::models::{ContactInquiry, Schema};
use crate::services::{create_document, record_contact_inquiry};
use crate::startup::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub id: String,
}

/// Accept a contact form submission and store it. Invalid bodies are
/// rejected before the store is touched.
#[tracing::instrument(skip(state, payload))]
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<ContactInquiry>, AppError>,
) -> Result<Json<ContactResponse>, AppError> {
    let ValidatedJson(inquiry) = payload.inspect_err(|e| {
        record_contact_inquiry("rejected");
        tracing::info!(error = %e, "Contact inquiry rejected");
    })?;

    match create_document(&state.store, &inquiry).await {
        Ok(id) => {
            record_contact_inquiry("stored");
            Ok(Json(ContactResponse { success: true, id }))
        }
        Err(e) => {
            record_contact_inquiry("failed");
            tracing::error!(
                collection = ContactInquiry::COLLECTION,
                error = %e,
                "Failed to store contact inquiry"
            );
            Err(e)
        }
    }
}
