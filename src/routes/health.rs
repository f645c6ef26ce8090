use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Value, json};

use crate::state::SharedState;

/// Own liveness plus backend reachability. 503 when the backend is down.
pub async fn status(State(state): State<SharedState>) -> (StatusCode, Json<Value>) {
    let backend_url = state.backend.base_url().to_string();

    match state.backend.health().await {
        Ok(health) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "backend": {
                    "url": backend_url,
                    "reachable": true,
                    "status": health.status,
                    "timestamp": health.timestamp,
                },
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "backend health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "backend": {
                        "url": backend_url,
                        "reachable": false,
                        "error": e.to_string(),
                    },
                })),
            )
        }
    }
}
