//! Format dispatch for uploaded bytes and files on disk.

use std::path::Path;

use adrlit_common::{AdrlitError, Result};
use tracing::info;

use crate::docx_parser::read_docx;
use crate::models::{DocumentFormat, LoadedDocument};
use crate::pdf_parser::read_pdf;

pub fn read_plain_text(bytes: &[u8]) -> LoadedDocument {
    LoadedDocument {
        format: DocumentFormat::PlainText,
        text: String::from_utf8_lossy(bytes).into_owned(),
        page_count: None,
    }
}

pub fn load_document(format: DocumentFormat, bytes: &[u8]) -> Result<LoadedDocument> {
    let doc = match format {
        DocumentFormat::Pdf       => read_pdf(bytes)?,
        DocumentFormat::Docx      => read_docx(bytes)?,
        DocumentFormat::PlainText => read_plain_text(bytes),
    };
    match doc.page_count {
        Some(pages) => info!("Loaded {} document: {} pages, {} chars", format.as_str(), pages, doc.text.len()),
        None => info!("Loaded {} document: {} chars", format.as_str(), doc.text.len()),
    }
    Ok(doc)
}

/// Read a file and detect its format from the extension.
pub fn load_path(path: &Path) -> Result<LoadedDocument> {
    let name = path.to_string_lossy();
    let format = DocumentFormat::from_file_name(&name)
        .ok_or_else(|| AdrlitError::UnsupportedFormat(name.to_string()))?;
    let bytes = std::fs::read(path)?;
    load_document(format, &bytes)
}
