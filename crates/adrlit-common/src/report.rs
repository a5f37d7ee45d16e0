//! A finished analysis, as cached by the web server and returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::insights::LiteratureInsights;

/// Where the analysed text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentSource {
    Upload { file_name: String, format: String },
    Pasted,
    File { path: String, format: String },
}

impl DocumentSource {
    pub fn label(&self) -> String {
        match self {
            DocumentSource::Upload { file_name, format } => format!("{file_name} ({format})"),
            DocumentSource::Pasted => "pasted text".to_string(),
            DocumentSource::File { path, format } => format!("{path} ({format})"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub source: DocumentSource,
    pub humanized: bool,
    /// SHA-256 of the analysed text, hex encoded.
    pub fingerprint: String,
    pub insights: LiteratureInsights,
}

impl AnalysisReport {
    pub fn new(text: &str, source: DocumentSource, humanized: bool, insights: LiteratureInsights) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            source,
            humanized,
            fingerprint: fingerprint(text),
            insights,
        }
    }
}

pub fn fingerprint(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable_hex() {
        let a = fingerprint("Risperidone and tramadol");
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(a, fingerprint("Risperidone and tramadol"));
        assert_ne!(a, fingerprint("risperidone and tramadol"));
    }

    #[test]
    fn test_source_label() {
        let upload = DocumentSource::Upload { file_name: "case.pdf".into(), format: "PDF".into() };
        assert_eq!(upload.label(), "case.pdf (PDF)");
        assert_eq!(DocumentSource::Pasted.label(), "pasted text");
    }
}
