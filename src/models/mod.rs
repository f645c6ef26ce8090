pub mod catalog;
pub mod decision;
pub mod project;
pub mod upload;

pub use catalog::{BackendHealth, ProjectDetailResponse, ProjectsResponse};
pub use decision::{AiDecision, Recommendation};
pub use project::Project;
pub use upload::{Analysis, ApiError, FileInfo, UploadResponse, UploadStatus};
