use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::backend::BackendError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    PayloadTooLarge(String),
    UnsupportedMediaType(String),
    BadGateway(String),
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the user.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Conflict(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::UnsupportedMediaType(msg)
            | AppError::BadGateway(msg) => msg,
            AppError::Internal(_) => "Internal server error",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload Too Large: {msg}"),
            AppError::UnsupportedMediaType(msg) => write!(f, "Unsupported Media Type: {msg}"),
            AppError::BadGateway(msg) => write!(f, "Bad Gateway: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(msg) = &self {
            tracing::error!("Internal error: {msg}");
        }

        let body = json!({ "error": self.message() });
        (self.status(), axum::Json(body)).into_response()
    }
}

impl AppError {
    /// Map a failed upload, keeping the wording shown on the dashboard.
    pub fn from_upload(err: BackendError) -> Self {
        let message = err.user_message();
        Self::from_backend(err, message)
    }

    fn from_backend(err: BackendError, message: String) -> Self {
        match err {
            BackendError::Rejected { status: 404, .. } => AppError::NotFound(message),
            BackendError::Rejected { status: 413, .. } => AppError::PayloadTooLarge(message),
            BackendError::Rejected {
                status,
                message: Some(_),
            } if (400..500).contains(&status) => AppError::BadRequest(message),
            _ => AppError::BadGateway(message),
        }
    }
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        let message = match err.server_message() {
            Some(msg) => msg.to_string(),
            None => match &err {
                BackendError::Rejected { status, .. } => {
                    format!("Analysis backend returned status {status}")
                }
                _ => "Analysis backend is unreachable".to_string(),
            },
        };
        Self::from_backend(err, message)
    }
}
