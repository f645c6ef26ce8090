use thiserror::Error;

/// Shown when the backend could not be reached or answered with something
/// that is not a structured error.
pub const UNREACHABLE_MESSAGE: &str =
    "Upload failed. Please make sure the backend server is running.";

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no error body"))]
    Rejected { status: u16, message: Option<String> },
    #[error("server reported failure: {}", .message.as_deref().unwrap_or("no message"))]
    Unsuccessful { message: Option<String> },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BackendError {
    /// The structured error string supplied by the backend, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            BackendError::Rejected { message, .. } | BackendError::Unsuccessful { message } => {
                message.as_deref()
            }
            BackendError::Http(_) | BackendError::Json(_) => None,
        }
    }

    /// Message for a failed upload: the server's own error when it sent one,
    /// otherwise the generic "backend not running" hint.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Rejected { message, .. } => {
                format!("Upload failed: {}", message.as_deref().unwrap_or("Unknown error"))
            }
            BackendError::Unsuccessful {
                message: Some(message),
            } => format!("Upload failed: {message}"),
            BackendError::Unsuccessful { message: None }
            | BackendError::Http(_)
            | BackendError::Json(_) => UNREACHABLE_MESSAGE.to_string(),
        }
    }
}
