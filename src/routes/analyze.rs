use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::analysis::{MemoView, ProjectCard, ResultsView, SummaryView, memo_view};
use crate::error::AppError;
use crate::models::FileInfo;
use crate::state::SharedState;
use crate::upload::{body_rejection, read_document};

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub file_info: FileInfo,
    pub summary: Option<SummaryView>,
    pub projects: Vec<ProjectCard>,
    pub decision: Option<MemoView>,
}

/// Stateless JSON rendition of an upload; no session is touched.
pub async fn analyze(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let limit = state.config.max_upload_label();
    let body = body.map_err(|rejection| body_rejection(rejection, &limit))?;
    let document = read_document(&headers, body, state.config.max_upload_size, &limit).await?;

    let analysis = state
        .backend
        .upload_rfp(&document)
        .await
        .map_err(AppError::from_upload)?;

    let results = ResultsView::build(analysis.projects());
    let decision = memo_view(analysis.decision(), Some(analysis.file().original_name.as_str()));
    let (file_info, _, _) = analysis.into_parts();

    Ok(Json(AnalyzeResponse {
        file_info,
        summary: results.summary,
        projects: results.cards,
        decision,
    }))
}
