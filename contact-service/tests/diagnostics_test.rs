mod common;

use common::TestApp;
use contact_service::services::{MemoryStore, StoreHandle};
use serde_json::{json, Value};

#[tokio::test]
async fn test_endpoint_reports_working_store() {
    let (app, _store) = TestApp::spawn_with_memory_store().await;
    app.post_contact(&json!({ "name": "Jo", "email": "a@b.com" }))
        .await;

    let response = app.get("/test").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!(["contactinquiry"]));
    assert!(body["database_url"].is_string());
    assert!(body["database_name"].is_string());
}

#[tokio::test]
async fn test_endpoint_is_ok_when_store_unreachable() {
    let app = TestApp::spawn(StoreHandle::ready(MemoryStore::unreachable(
        "contact_test",
        "no reachable servers",
    )))
    .await;

    let response = app.get("/test").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["database"],
        "⚠️  Connected but Error: no reachable servers"
    );
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn test_endpoint_is_ok_without_store() {
    for (handle, expected) in [
        (StoreHandle::Uninitialized, "⚠️  Available but not initialized"),
        (StoreHandle::Missing, "❌ Database module not found"),
    ] {
        let app = TestApp::spawn(handle).await;

        let response = app.get("/test").await;

        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["database"], expected);
        assert_eq!(body["connection_status"], "Not Connected");
    }
}
