#![allow(dead_code)]

use contact_service::config::{ContactConfig, DatabaseConfig, ObservabilityConfig};
use contact_service::services::{MemoryStore, StoreHandle};
use contact_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

pub fn test_config() -> ContactConfig {
    ContactConfig {
        common: CoreConfig { port: 0 },
        database: DatabaseConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

impl TestApp {
    /// Spawn the service on a random port around the given store handle.
    pub async fn spawn(store: StoreHandle) -> Self {
        let app = Application::build_with_store(test_config(), store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    /// Spawn with a fresh in-memory store and return it for assertions.
    pub async fn spawn_with_memory_store() -> (Self, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new("contact_test"));
        let app = Self::spawn(StoreHandle::Ready(store.clone())).await;
        (app, store)
    }

    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/contact", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
