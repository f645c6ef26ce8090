use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, StatusCode};
use bytes::{Bytes, BytesMut};

use crate::error::AppError;

use super::document::{DocumentKind, RfpDocument};

/// Multipart field carrying the document.
pub const FILE_FIELD: &str = "file";

#[derive(Debug)]
pub enum UploadRejection {
    /// No file field, or one with an empty filename.
    NoFile,
    TooManyFiles,
    UnsupportedType(String),
    TooLarge { limit: String },
    Malformed(String),
}

impl std::fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadRejection::NoFile => write!(f, "No file provided"),
            UploadRejection::TooManyFiles => write!(f, "Only one file can be uploaded at a time"),
            UploadRejection::UnsupportedType(name) => write!(
                f,
                "Invalid file type for '{name}'. Allowed: {}",
                DocumentKind::supported_label()
            ),
            UploadRejection::TooLarge { limit } => {
                write!(f, "File too large. Maximum size is {limit}")
            }
            UploadRejection::Malformed(msg) => write!(f, "Malformed upload: {msg}"),
        }
    }
}

impl From<UploadRejection> for AppError {
    fn from(rejection: UploadRejection) -> Self {
        let message = rejection.to_string();
        match rejection {
            UploadRejection::UnsupportedType(_) => AppError::UnsupportedMediaType(message),
            UploadRejection::TooLarge { .. } => AppError::PayloadTooLarge(message),
            UploadRejection::NoFile
            | UploadRejection::TooManyFiles
            | UploadRejection::Malformed(_) => AppError::BadRequest(message),
        }
    }
}

/// A body the `Bytes` extractor refused. Anything over the request limit is
/// reported with the same wording as an oversized file field.
pub fn body_rejection(rejection: BytesRejection, limit_label: &str) -> UploadRejection {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadRejection::TooLarge {
            limit: limit_label.to_string(),
        }
    } else {
        UploadRejection::Malformed(rejection.body_text())
    }
}

/// Read the single `file` field of a multipart body and validate it against
/// the allow-list and the size cap. Other fields are skipped.
pub async fn read_document(
    headers: &HeaderMap,
    body: Bytes,
    max_size: usize,
    limit_label: &str,
) -> Result<RfpDocument, UploadRejection> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| UploadRejection::Malformed("missing multipart boundary".to_string()))?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut document: Option<RfpDocument> = None;
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadRejection::Malformed(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().trim().to_string();
        if file_name.is_empty() {
            continue;
        }
        if document.is_some() {
            return Err(UploadRejection::TooManyFiles);
        }

        let content_type = field.content_type().map(|m| m.essence_str().to_string());
        let kind = DocumentKind::detect(&file_name, content_type.as_deref())
            .ok_or_else(|| UploadRejection::UnsupportedType(file_name.clone()))?;

        let mut buf = BytesMut::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| UploadRejection::Malformed(e.to_string()))?
        {
            if buf.len() + chunk.len() > max_size {
                return Err(UploadRejection::TooLarge {
                    limit: limit_label.to_string(),
                });
            }
            buf.extend_from_slice(&chunk);
        }

        document = Some(RfpDocument {
            file_name,
            kind,
            bytes: buf.freeze(),
        });
    }

    document.ok_or(UploadRejection::NoFile)
}
