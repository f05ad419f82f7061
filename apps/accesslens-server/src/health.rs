//! Health check endpoints.

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe: the process is up.
pub async fn healthz_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness probe. The server holds no connections of its own; the
/// store is contacted per request, so readiness equals liveness here.
pub async fn readyz_handler() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}
