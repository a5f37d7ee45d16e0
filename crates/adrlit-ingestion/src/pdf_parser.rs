//! PDF text extraction using lopdf.

use adrlit_common::{AdrlitError, Result};
use lopdf::Document as PdfDoc;
use tracing::{debug, warn};

use crate::models::{DocumentFormat, LoadedDocument};

/// Extract the text of every page, in page order.
///
/// Pages whose extracted text is empty (scans, blank pages) are skipped; the
/// rest are joined with a newline, unmodified.
pub fn read_pdf(bytes: &[u8]) -> Result<LoadedDocument> {
    let pdf = PdfDoc::load_mem(bytes)
        .map_err(|e| AdrlitError::Document(format!("unreadable PDF: {e}")))?;

    let pages = pdf.get_pages();
    let mut page_texts: Vec<String> = Vec::with_capacity(pages.len());

    for &page_num in pages.keys() {
        match pdf.extract_text(&[page_num]) {
            Ok(text) if !text.is_empty() => page_texts.push(text),
            Ok(_) => debug!(page = page_num, "PDF page has no extractable text"),
            Err(e) => warn!(page = page_num, error = %e, "Failed to extract PDF page text"),
        }
    }

    debug!("PDF: {} of {} pages carried text", page_texts.len(), pages.len());

    Ok(LoadedDocument {
        format: DocumentFormat::Pdf,
        page_count: Some(page_texts.len()),
        text: page_texts.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_a_document_error() {
        let err = read_pdf(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AdrlitError::Document(_)));
    }
}
