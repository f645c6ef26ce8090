pub mod document;
pub mod form;
pub mod pipeline;

pub use document::{DocumentKind, RfpDocument};
pub use form::{UploadRejection, body_rejection, read_document};
pub use pipeline::UploadOutcome;
