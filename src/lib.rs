pub mod analysis;
pub mod backend;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod routes;
pub mod session;
pub mod state;
pub mod upload;
pub mod views;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::backend::AnalysisBackend;
use crate::config::Config;
use crate::dashboard::SessionStore;
use crate::state::{AppState, SharedState};

/// Room for multipart boundaries and part headers on top of the document.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_app(config: Config, backend: Arc<dyn AnalysisBackend>) -> (Router, SharedState) {
    let body_limit = config.max_upload_size + MULTIPART_OVERHEAD;

    tracing::info!(
        backend = backend.base_url(),
        max_upload = %config.max_upload_label(),
        "Analysis backend configured"
    );

    let state: SharedState = Arc::new(AppState {
        config,
        backend,
        sessions: SessionStore::new(),
    });

    let security_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let app = Router::new()
        .merge(routes::api_routes())
        .merge(routes::upload_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(security_headers)
        .with_state(state.clone());

    (app, state)
}

async fn health() -> &'static str {
    "ok"
}
