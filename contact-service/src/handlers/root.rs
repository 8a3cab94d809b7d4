use axum::Json;
use serde_json::{json, Value};

pub async fn read_root() -> Json<Value> {
    Json(json!({ "message": "TALaiNT Labz Backend Running" }))
}

pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from TALaiNT Labz backend API!" }))
}
