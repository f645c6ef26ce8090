//! Client side of the analysis backend: the upload endpoint plus the
//! catalog and health endpoints it exposes.

pub mod error;
pub mod http;

use async_trait::async_trait;

use crate::models::{Analysis, BackendHealth, Project};
use crate::upload::RfpDocument;

pub use error::{BackendError, UNREACHABLE_MESSAGE};
pub use http::HttpBackend;

pub const UPLOAD_PATH: &str = "/api/upload-rfp";
pub const HEALTH_PATH: &str = "/api/health";
pub const PROJECTS_PATH: &str = "/api/projects";
pub const PROJECT_PATH: &str = "/api/project";

/// Everything the front end needs from the analysis service.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Send one validated RFP document for analysis.
    async fn upload_rfp(&self, document: &RfpDocument) -> Result<Analysis, BackendError>;

    async fn health(&self) -> Result<BackendHealth, BackendError>;

    async fn list_projects(&self) -> Result<Vec<Project>, BackendError>;

    /// `Ok(None)` when the backend does not know the id.
    async fn get_project(&self, id: i64) -> Result<Option<Project>, BackendError>;

    /// Base URL, for display and logging.
    fn base_url(&self) -> &str;
}
