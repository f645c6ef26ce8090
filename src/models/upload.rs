use serde::{Deserialize, Serialize};

use super::{AiDecision, Project};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub original_name: String,
    pub saved_name: String,
    pub size: u64,
}

/// Success envelope of `POST /api/upload-rfp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub file_info: FileInfo,
    pub similar_projects: Vec<Project>,
    #[serde(default)]
    pub ai_decision: Option<AiDecision>,
}

/// The fields every upload reply carries, successful or not. Decoded before
/// the full envelope so a `success: false` body without project data still
/// yields its message.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body returned by the backend on non-2xx replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// A successful analysis, split on whether the backend ran the decision stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    ProjectsOnly {
        file: FileInfo,
        projects: Vec<Project>,
    },
    WithDecision {
        file: FileInfo,
        projects: Vec<Project>,
        decision: AiDecision,
    },
}

impl Analysis {
    pub fn file(&self) -> &FileInfo {
        match self {
            Analysis::ProjectsOnly { file, .. } | Analysis::WithDecision { file, .. } => file,
        }
    }

    pub fn projects(&self) -> &[Project] {
        match self {
            Analysis::ProjectsOnly { projects, .. } | Analysis::WithDecision { projects, .. } => {
                projects
            }
        }
    }

    pub fn decision(&self) -> Option<&AiDecision> {
        match self {
            Analysis::ProjectsOnly { .. } => None,
            Analysis::WithDecision { decision, .. } => Some(decision),
        }
    }

    pub fn into_parts(self) -> (FileInfo, Vec<Project>, Option<AiDecision>) {
        match self {
            Analysis::ProjectsOnly { file, projects } => (file, projects, None),
            Analysis::WithDecision {
                file,
                projects,
                decision,
            } => (file, projects, Some(decision)),
        }
    }
}

impl From<UploadResponse> for Analysis {
    fn from(resp: UploadResponse) -> Self {
        match resp.ai_decision {
            Some(decision) => Analysis::WithDecision {
                file: resp.file_info,
                projects: resp.similar_projects,
                decision,
            },
            None => Analysis::ProjectsOnly {
                file: resp.file_info,
                projects: resp.similar_projects,
            },
        }
    }
}
