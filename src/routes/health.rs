use axum::{Router, response::Json, routing::get};
use serde_json::json;

use crate::server::AppState;

/// Root endpoint handler.
///
/// # Route
/// - **Method**: GET
/// - **Path**: `/`
///
/// # Response Format
/// ```json
/// { "message": "welcome to your blog" }
/// ```
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "welcome to your blog" }))
}

/// Health check endpoint handler.
///
/// Lightweight liveness probe for load balancers and container orchestrators.
///
/// # Route
/// - **Method**: GET
/// - **Path**: `/ping`
///
/// # Examples
/// ```bash
/// curl http://localhost:8000/ping
/// # Response: {"status":"pong"}
/// ```
pub async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "status": "pong" }))
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/ping", get(ping))
}
