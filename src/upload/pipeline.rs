use uuid::Uuid;

use crate::backend::UNREACHABLE_MESSAGE;
use crate::error::AppError;
use crate::models::Analysis;
use crate::state::SharedState;

use super::RfpDocument;

#[derive(Debug)]
pub enum UploadOutcome {
    Completed(Analysis),
    /// The backend failed; the message has been flashed on the dashboard.
    Failed(String),
    /// The session was reset while the request was in flight, so the result
    /// was dropped.
    Superseded,
}

/// Run one upload for a session: mark it loading, forward the document, then
/// record success or failure against the ticket taken at the start.
///
/// The backend call and the ticket redemption run on their own task, so the
/// session leaves the loading state even if the client goes away mid-request.
pub async fn run(
    state: &SharedState,
    session: Uuid,
    document: RfpDocument,
) -> Result<UploadOutcome, AppError> {
    let ticket = state
        .sessions
        .begin_upload(session)
        .map_err(|e| AppError::Conflict(e.to_string()))?;

    tracing::info!(
        %session,
        generation = ticket.generation(),
        file = %document.file_name,
        kind = document.kind.extension(),
        "upload started"
    );

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let state = task_state;
        match state.backend.upload_rfp(&document).await {
            Ok(analysis) => {
                let projects = analysis.projects().len();
                if state.sessions.complete(session, ticket, analysis.clone()) {
                    tracing::info!(%session, projects, "upload completed");
                    UploadOutcome::Completed(analysis)
                } else {
                    tracing::info!(%session, "upload result superseded");
                    UploadOutcome::Superseded
                }
            }
            Err(e) => {
                tracing::warn!(%session, error = %e, "upload failed");
                let message = e.user_message();
                if state.sessions.fail(session, ticket, message.clone()) {
                    UploadOutcome::Failed(message)
                } else {
                    UploadOutcome::Superseded
                }
            }
        }
    });

    match task.await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            // The task died before redeeming the ticket; release the session.
            state.sessions.fail(session, ticket, UNREACHABLE_MESSAGE);
            Err(AppError::Internal(format!("upload task failed: {e}")))
        }
    }
}
