//! In-process document store for tests and database-less local runs.

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use service_core::error::AppError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::DocumentStore;

pub struct MemoryStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
            failure: None,
        }
    }

    /// A store whose every call fails with `reason`.
    pub fn unreachable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new(name)
        }
    }

    pub async fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn check_reachable(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(reason) => Err(AppError::DatabaseError(anyhow::anyhow!(reason.clone()))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, collection: &str, mut document: Document) -> Result<String, AppError> {
        self.check_reachable()?;

        let id = ObjectId::new();
        document.insert("_id", id);
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id.to_hex())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.check_reachable()?;
        Ok(self.collections.read().await.keys().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_reachable()
    }
}
