//! Operator-facing database diagnostics served at `GET /test`.
//!
//! The report is assembled by independent checks. Each check records its
//! outcome as a status string on the report; none of them can fail the
//! request.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::config::{non_empty_env, DATABASE_NAME_VAR, DATABASE_URL_VAR};
use crate::services::{DocumentStore, StoreHandle};
use crate::startup::AppState;

/// Maximum number of collection names included in a report.
pub const COLLECTION_LIMIT: usize = 10;

/// Error text longer than this is cut before it is shown.
pub const ERROR_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticReport {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(ERROR_PREVIEW_CHARS).collect()
}

/// Inspect the shared store handle. Returns the store only when it is usable.
pub fn inspect_store_handle(
    handle: &StoreHandle,
    report: &mut DiagnosticReport,
) -> Option<Arc<dyn DocumentStore>> {
    match handle {
        StoreHandle::Missing => {
            report.database = "❌ Database module not found".to_string();
            None
        }
        StoreHandle::Uninitialized => {
            report.database = "⚠️  Available but not initialized".to_string();
            None
        }
        StoreHandle::Failed(reason) => {
            report.database = format!("❌ Error: {}", preview(reason));
            None
        }
        StoreHandle::Ready(store) => {
            report.database = "✅ Available".to_string();
            report.database_url = Some("✅ Configured".to_string());
            report.database_name = Some(match store.name() {
                "" => "✅ Connected".to_string(),
                name => name.to_string(),
            });
            report.connection_status = "Connected".to_string();
            Some(store.clone())
        }
    }
}

/// List up to [`COLLECTION_LIMIT`] collections from a live store.
pub async fn list_collections(store: &dyn DocumentStore, report: &mut DiagnosticReport) {
    match store.list_collection_names().await {
        Ok(names) => {
            report.collections = names.into_iter().take(COLLECTION_LIMIT).collect();
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Listing collections failed");
            report.database = format!("⚠️  Connected but Error: {}", preview(&e.to_string()));
        }
    }
}

/// Report presence, not validity, of the database variables.
pub fn check_environment(report: &mut DiagnosticReport, is_set: impl Fn(&str) -> bool) {
    let presence = |key: &str| {
        if is_set(key) {
            "✅ Set".to_string()
        } else {
            "❌ Not Set".to_string()
        }
    };

    report.database_url = Some(presence(DATABASE_URL_VAR));
    report.database_name = Some(presence(DATABASE_NAME_VAR));
}

pub async fn build_report(
    handle: &StoreHandle,
    is_set: impl Fn(&str) -> bool,
) -> DiagnosticReport {
    let mut report = DiagnosticReport::default();

    if let Some(store) = inspect_store_handle(handle, &mut report) {
        tracing::debug!(database = %store.name(), "Diagnostics inspecting store");
        list_collections(store.as_ref(), &mut report).await;
    }

    check_environment(&mut report, is_set);

    report
}

/// Database connectivity report. Always answers 200.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(build_report(&state.store, |key| non_empty_env(key).is_some()).await)
}
