use askama::Template;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::session;
use crate::state::SharedState;
use crate::upload::{UploadOutcome, UploadRejection, body_rejection, pipeline, read_document};
use crate::views::index::DashboardTemplate;

/// Browser upload. The outcome lands in the session's dashboard; HTMX
/// callers get the refreshed partial, plain form posts are redirected home.
pub async fn upload(
    State(state): State<SharedState>,
    jar: CookieJar,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let (jar, session) = session::resolve(jar);
    let limit = state.config.max_upload_label();

    let document = match body {
        Ok(body) => read_document(&headers, body, state.config.max_upload_size, &limit).await,
        Err(rejection) => Err(body_rejection(rejection, &limit)),
    };

    match document {
        Ok(document) => match pipeline::run(&state, session, document).await {
            Ok(UploadOutcome::Superseded) => {
                tracing::debug!(%session, "upload outcome discarded");
            }
            Ok(_) => {}
            Err(e) => state.sessions.flash(session, e.message()),
        },
        // Nothing chosen: leave the dashboard as it is.
        Err(UploadRejection::NoFile) => {}
        Err(rejection) => {
            tracing::info!(%session, reason = %rejection, "upload rejected");
            state.sessions.flash(session, rejection.to_string());
        }
    }

    respond(&state, jar, &headers, session)
}

/// Clear the session's dashboard, abandoning any upload still in flight.
pub async fn reset(
    State(state): State<SharedState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    let (jar, session) = session::resolve(jar);
    state.sessions.reset(session);
    tracing::info!(%session, "dashboard reset");

    respond(&state, jar, &headers, session)
}

fn respond(state: &SharedState, jar: CookieJar, headers: &HeaderMap, session: Uuid) -> Response {
    if is_htmx(headers) {
        let dashboard = state.sessions.snapshot(session);
        let template = DashboardTemplate::build(&dashboard, &state.config);
        (jar, Html(template.render().unwrap_or_default())).into_response()
    } else {
        (jar, Redirect::to("/")).into_response()
    }
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
