pub mod index;
pub mod projects;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Dashboard
        .route("/", get(index::index))
        // Catalog
        .route("/projects", get(projects::list))
        .route("/projects/{id}", get(projects::show))
        // HTMX partials
        .route("/htmx/dashboard", get(index::dashboard_partial))
}
