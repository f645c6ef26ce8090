use bytes::Bytes;

/// Document formats the analysis backend can ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Word,
    WordOpenXml,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::PlainText,
        DocumentKind::Pdf,
        DocumentKind::Word,
        DocumentKind::WordOpenXml,
    ];

    pub fn mime(&self) -> &'static str {
        match self {
            DocumentKind::PlainText => "text/plain",
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Word => "application/msword",
            DocumentKind::WordOpenXml => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::PlainText => "txt",
            DocumentKind::Pdf => "pdf",
            DocumentKind::Word => "doc",
            DocumentKind::WordOpenXml => "docx",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension().eq_ignore_ascii_case(ext))
    }

    /// Matches on the essence of the MIME type; parameters such as
    /// `; charset=utf-8` are ignored.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.mime().eq_ignore_ascii_case(essence))
    }

    /// Accepts a file when either its extension or its declared content type
    /// is on the allow-list. The extension wins when both are present, since
    /// browsers often send `application/octet-stream` for Word files.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        let by_extension = file_name
            .rsplit_once('.')
            .and_then(|(_, ext)| Self::from_extension(ext));
        by_extension.or_else(|| content_type.and_then(Self::from_mime))
    }

    /// Value for the `accept` attribute of the file picker.
    pub fn accept_attribute() -> String {
        Self::ALL
            .iter()
            .flat_map(|kind| [format!(".{}", kind.extension()), kind.mime().to_string()])
            .collect::<Vec<_>>()
            .join(",")
    }

    /// `PDF, DOC, DOCX, TXT` style list for help text.
    pub fn supported_label() -> String {
        [
            DocumentKind::Pdf,
            DocumentKind::Word,
            DocumentKind::WordOpenXml,
            DocumentKind::PlainText,
        ]
        .iter()
        .map(|kind| kind.extension().to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// A single validated upload, ready to forward.
#[derive(Debug, Clone)]
pub struct RfpDocument {
    pub file_name: String,
    pub kind: DocumentKind,
    pub bytes: Bytes,
}
