//! DOCX paragraph extraction.
//!
//! A .docx file is a zip archive; the body lives in `word/document.xml`.
//! Each top-level `w:p` becomes one line of output, built from its `w:t`
//! runs. Paragraphs nested inside a paragraph (text boxes) are skipped.

use std::io::{Cursor, Read};

use adrlit_common::{AdrlitError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::models::{DocumentFormat, LoadedDocument};

const DOCUMENT_PART: &str = "word/document.xml";

pub fn read_docx(bytes: &[u8]) -> Result<LoadedDocument> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AdrlitError::Document(format!("unreadable DOCX archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| AdrlitError::Document(format!("DOCX has no {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)?;

    let paragraphs = paragraphs_from_xml(&xml)?;
    debug!("DOCX: {} paragraphs", paragraphs.len());

    Ok(LoadedDocument {
        format: DocumentFormat::Docx,
        text: paragraphs.join("\n"),
        page_count: None,
    })
}

/// Paragraph texts from a WordprocessingML body, in document order.
pub fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    // Open w:p elements; only depth 1 contributes text
    let mut depth = 0usize;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    depth += 1;
                    if depth == 1 {
                        current.clear();
                    }
                }
                b"w:r" if depth == 1 => in_run = true,
                b"w:t" if depth == 1 => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" if depth == 0 => paragraphs.push(String::new()),
                // w:tab also appears in paragraph properties as a tab stop
                b"w:tab" if in_run && depth == 1 => current.push('\t'),
                b"w:br" | b"w:cr" if in_run && depth == 1 => current.push('\n'),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    if depth == 1 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    depth = depth.saturating_sub(1);
                }
                b"w:r" if depth == 1 => in_run = false,
                b"w:t" if depth == 1 => in_text = false,
                _ => {}
            },
            Ok(Event::Text(t)) if in_text && depth == 1 => {
                let text = t
                    .unescape()
                    .map_err(|e| AdrlitError::Document(format!("bad DOCX text: {e}")))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AdrlitError::Document(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}
