//! adrlit-ingestion — Turns uploaded or on-disk documents into plain text.
//! - Format detection from MIME type or file name
//! - PDF page text extraction (lopdf)
//! - DOCX paragraph extraction (zip + quick-xml)

pub mod models;
pub mod pdf_parser;
pub mod docx_parser;
pub mod loader;

pub use loader::{load_document, load_path};
pub use models::{DocumentFormat, LoadedDocument};
