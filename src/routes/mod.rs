pub mod analyze;
pub mod health;
pub mod upload;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/analyze", post(analyze::analyze))
        .route("/api/health", get(health::status))
}

pub fn upload_routes() -> Router<SharedState> {
    Router::new()
        .route("/upload", post(upload::upload))
        .route("/reset", post(upload::reset))
}
