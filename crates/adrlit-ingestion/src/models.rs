//! Data models for document ingestion.

use serde::{Deserialize, Serialize};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MIME: &str = "text/plain";

/// Document formats the extractor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Map a `Content-Type` value; parameters after `;` are ignored.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            PDF_MIME  => Some(DocumentFormat::Pdf),
            DOCX_MIME => Some(DocumentFormat::Docx),
            TEXT_MIME => Some(DocumentFormat::PlainText),
            _         => None,
        }
    }

    /// Infer from the file extension (case insensitive).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "pdf"  => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt"  => Some(DocumentFormat::PlainText),
            _      => None,
        }
    }

    /// MIME type first, then file name. Browsers often send
    /// `application/octet-stream` for DOCX, hence the fallback.
    pub fn detect(mime: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        mime.and_then(Self::from_mime)
            .or_else(|| file_name.and_then(Self::from_file_name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf       => "PDF",
            DocumentFormat::Docx      => "DOCX",
            DocumentFormat::PlainText => "Text",
        }
    }
}

/// Plain text pulled out of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub format: DocumentFormat,
    pub text: String,
    /// Pages with extractable text (PDF only)
    pub page_count: Option<usize>,
}

impl LoadedDocument {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime() {
        assert_eq!(DocumentFormat::from_mime("application/pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_mime(DOCX_MIME), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_mime("text/plain; charset=utf-8"), Some(DocumentFormat::PlainText));
        assert_eq!(DocumentFormat::from_mime("image/png"), None);
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            DocumentFormat::detect(Some("application/octet-stream"), Some("Case Report.DOCX")),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(DocumentFormat::detect(None, Some("paper.pdf")), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::detect(None, Some("notes")), None);
        assert_eq!(DocumentFormat::detect(Some("application/pdf"), Some("x.docx")), Some(DocumentFormat::Pdf));
    }
}
