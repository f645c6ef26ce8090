use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::models::{
    Analysis, ApiError, BackendHealth, Project, ProjectDetailResponse, ProjectsResponse,
    UploadResponse, UploadStatus,
};
use crate::upload::RfpDocument;

use super::{
    AnalysisBackend, BackendError, HEALTH_PATH, PROJECT_PATH, PROJECTS_PATH, UPLOAD_PATH,
};

/// reqwest-backed client for the analysis service.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// `base_url` should look like `http://localhost:5000`; a trailing slash
    /// is dropped. Without a timeout the transport default applies.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn upload_rfp(&self, document: &RfpDocument) -> Result<Analysis, BackendError> {
        let url = self.url(UPLOAD_PATH);

        let part = Part::stream_with_length(document.bytes.clone(), document.bytes.len() as u64)
            .file_name(document.file_name.clone())
            .mime_str(document.kind.mime())?;
        let form = Form::new().part("file", part);

        info!(
            url = %url,
            file = %document.file_name,
            size = document.bytes.len(),
            "uploading RFP"
        );
        let resp = self.client.post(&url).multipart(form).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            let err = rejected(status, &body);
            warn!(error = %err, "upload rejected");
            return Err(err);
        }

        let outcome: UploadStatus = serde_json::from_slice(&body)?;
        if !outcome.success {
            warn!(message = ?outcome.message, "backend reported unsuccessful upload");
            return Err(BackendError::Unsuccessful {
                message: outcome.error.or(outcome.message),
            });
        }

        let envelope: UploadResponse = serde_json::from_slice(&body)?;
        info!(
            saved_name = %envelope.file_info.saved_name,
            projects = envelope.similar_projects.len(),
            decision = envelope.ai_decision.is_some(),
            "analysis received"
        );
        Ok(Analysis::from(envelope))
    }

    async fn health(&self) -> Result<BackendHealth, BackendError> {
        let resp = self.client.get(self.url(HEALTH_PATH)).send().await?;
        decode(resp).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, BackendError> {
        let resp = self.client.get(self.url(PROJECTS_PATH)).send().await?;
        let catalog: ProjectsResponse = decode(resp).await?;
        info!(count = catalog.projects.len(), "fetched project catalog");
        Ok(catalog.projects)
    }

    async fn get_project(&self, id: i64) -> Result<Option<Project>, BackendError> {
        let url = format!("{}/{id}", self.url(PROJECT_PATH));
        let resp = self.client.get(&url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let detail: ProjectDetailResponse = decode(resp).await?;
        Ok(Some(detail.project))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, BackendError> {
    let status = resp.status();
    let body = resp.bytes().await?;
    if !status.is_success() {
        return Err(rejected(status, &body));
    }
    Ok(serde_json::from_slice(&body)?)
}

/// Non-2xx reply, keeping the `{"error": ...}` text when the body has one.
fn rejected(status: StatusCode, body: &[u8]) -> BackendError {
    BackendError::Rejected {
        status: status.as_u16(),
        message: serde_json::from_slice::<ApiError>(body).ok().map(|e| e.error),
    }
}
