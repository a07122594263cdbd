use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /api/health
/// Status plus an ISO-8601 timestamp, matching the original probe shape.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
