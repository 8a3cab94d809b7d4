//! Document store adapter.
//!
//! [`DocumentStore`] is the seam between handlers and the persistence
//! backend. [`StoreHandle`] is created once at startup and shared read-only
//! by every request.

use async_trait::async_trait;
use mongodb::bson::{self, Bson, DateTime as BsonDateTime, Document};
use service_core::error::AppError;
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::Schema;

pub const STORE_UNAVAILABLE: &str =
    "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables.";

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Identifier of the underlying database.
    fn name(&self) -> &str;

    /// Insert one document and return its generated id.
    async fn insert(&self, collection: &str, document: Document) -> Result<String, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub enum StoreHandle {
    /// No store adapter is compiled into this build.
    Missing,
    /// `DATABASE_URL` or `DATABASE_NAME` is not set.
    Uninitialized,
    /// The client could not be constructed.
    Failed(String),
    Ready(Arc<dyn DocumentStore>),
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreHandle::Missing => write!(f, "Missing"),
            StoreHandle::Uninitialized => write!(f, "Uninitialized"),
            StoreHandle::Failed(reason) => f.debug_tuple("Failed").field(reason).finish(),
            StoreHandle::Ready(store) => f.debug_tuple("Ready").field(&store.name()).finish(),
        }
    }
}

impl StoreHandle {
    pub fn ready(store: impl DocumentStore + 'static) -> Self {
        StoreHandle::Ready(Arc::new(store))
    }

    /// Resolve the handle from configuration. Never fails: an unusable store
    /// is represented by the returned variant.
    #[cfg(feature = "mongo")]
    pub async fn connect(config: &DatabaseConfig) -> Self {
        use secrecy::ExposeSecret;

        let (Some(url), Some(name)) = (config.url.as_ref(), config.name.as_deref()) else {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set; running without a database");
            return StoreHandle::Uninitialized;
        };

        match super::MongoStore::connect(url.expose_secret(), name).await {
            Ok(store) => StoreHandle::ready(store),
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize document store");
                StoreHandle::Failed(e.to_string())
            }
        }
    }

    #[cfg(not(feature = "mongo"))]
    pub async fn connect(_config: &DatabaseConfig) -> Self {
        tracing::warn!("Built without a document store adapter");
        StoreHandle::Missing
    }

    pub fn store(&self) -> Result<&Arc<dyn DocumentStore>, AppError> {
        match self {
            StoreHandle::Ready(store) => Ok(store),
            _ => Err(AppError::DatabaseError(anyhow::anyhow!(STORE_UNAVAILABLE))),
        }
    }
}

/// Persist `record` into its schema's collection, stamping `created_at` and
/// `updated_at`. Single attempt; any store error is returned to the caller.
pub async fn create_document<T: Schema>(
    handle: &StoreHandle,
    record: &T,
) -> Result<String, AppError> {
    record.validate()?;
    let store = handle.store()?;

    let mut document = bson::to_document(record).map_err(|e| {
        AppError::InternalError(anyhow::anyhow!("Failed to serialize {}: {}", T::COLLECTION, e))
    })?;
    let now = BsonDateTime::now();
    document.insert("created_at", Bson::DateTime(now));
    document.insert("updated_at", Bson::DateTime(now));

    let id = store.insert(T::COLLECTION, document).await?;

    tracing::info!(collection = T::COLLECTION, document_id = %id, "Document created");

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactInquiry;
    use crate::services::MemoryStore;
    use serde_json::json;

    fn inquiry(name: &str) -> ContactInquiry {
        serde_json::from_value(json!({ "name": name, "email": "a@b.com" })).unwrap()
    }

    #[tokio::test]
    async fn create_document_inserts_into_schema_collection() {
        let store = Arc::new(MemoryStore::new("test"));
        let handle = StoreHandle::Ready(store.clone());

        let id = create_document(&handle, &inquiry("Jo")).await.unwrap();

        assert!(!id.is_empty());
        let docs = store.documents("contactinquiry").await;
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get_str("name").unwrap(), "Jo");
        assert_eq!(docs[0].get_str("hiring_need").unwrap(), "unsure");
        assert!(docs[0].get_datetime("created_at").is_ok());
        assert!(docs[0].get_datetime("updated_at").is_ok());
    }

    #[tokio::test]
    async fn same_record_twice_creates_two_documents() {
        let store = Arc::new(MemoryStore::new("test"));
        let handle = StoreHandle::Ready(store.clone());
        let record = inquiry("Jo");

        let first = create_document(&handle, &record).await.unwrap();
        let second = create_document(&handle, &record).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.count("contactinquiry").await, 2);
    }

    #[tokio::test]
    async fn invalid_record_is_never_written() {
        let store = Arc::new(MemoryStore::new("test"));
        let handle = StoreHandle::Ready(store.clone());

        let err = create_document(&handle, &inquiry("J")).await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(store.count("contactinquiry").await, 0);
    }

    #[tokio::test]
    async fn unavailable_handle_is_a_database_error() {
        for handle in [
            StoreHandle::Missing,
            StoreHandle::Uninitialized,
            StoreHandle::Failed("bad uri".to_string()),
        ] {
            let err = create_document(&handle, &inquiry("Jo")).await.unwrap_err();
            assert!(matches!(err, AppError::DatabaseError(_)));
            assert!(err.to_string().contains("Database not available"));
        }
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let handle = StoreHandle::ready(MemoryStore::unreachable("test", "connection refused"));

        let err = create_document(&handle, &inquiry("Jo")).await.unwrap_err();

        assert!(err.to_string().contains("connection refused"));
    }

    #[cfg(not(feature = "mongo"))]
    #[tokio::test]
    async fn connect_without_adapter_is_missing() {
        let handle = StoreHandle::connect(&DatabaseConfig::default()).await;
        assert!(matches!(handle, StoreHandle::Missing));
    }

    #[cfg(feature = "mongo")]
    #[tokio::test]
    async fn connect_without_configuration_is_uninitialized() {
        let handle = StoreHandle::connect(&DatabaseConfig::default()).await;
        assert!(matches!(handle, StoreHandle::Uninitialized));
    }

    #[cfg(feature = "mongo")]
    #[tokio::test]
    async fn connect_with_invalid_uri_is_failed() {
        let config = DatabaseConfig {
            url: Some(secrecy::Secret::new("not-a-mongo-uri".to_string())),
            name: Some("contacts".to_string()),
        };

        let handle = StoreHandle::connect(&config).await;

        assert!(matches!(handle, StoreHandle::Failed(_)));
    }
}
