use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::CookieJar;

use crate::analysis::{MemoView, ResultsView, memo_view};
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::session;
use crate::state::SharedState;
use crate::upload::DocumentKind;

/// The swappable part of the page: upload widget, status line, loading
/// indicator, memo and results.
#[derive(Template)]
#[template(path = "partials/dashboard.html")]
pub struct DashboardTemplate {
    loading: bool,
    uploaded_file: Option<String>,
    error: Option<String>,
    memo: Option<MemoView>,
    results: ResultsView,
    accept: String,
    supported: String,
    max_upload: String,
}

impl DashboardTemplate {
    pub fn build(dashboard: &Dashboard, config: &Config) -> Self {
        Self {
            loading: dashboard.is_loading(),
            uploaded_file: dashboard.uploaded_file().map(str::to_string),
            error: dashboard.error().map(str::to_string),
            memo: memo_view(dashboard.decision(), dashboard.uploaded_file()),
            results: ResultsView::build(dashboard.projects()),
            accept: DocumentKind::accept_attribute(),
            supported: DocumentKind::supported_label(),
            max_upload: config.max_upload_label(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    dashboard: DashboardTemplate,
}

pub async fn index(State(state): State<SharedState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, session) = session::resolve(jar);
    let dashboard = state.sessions.snapshot(session);

    let template = IndexTemplate {
        dashboard: DashboardTemplate::build(&dashboard, &state.config),
    };
    (jar, Html(template.render().unwrap_or_default()))
}

pub async fn dashboard_partial(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let (jar, session) = session::resolve(jar);
    let dashboard = state.sessions.snapshot(session);

    let template = DashboardTemplate::build(&dashboard, &state.config);
    (jar, Html(template.render().unwrap_or_default()))
}
