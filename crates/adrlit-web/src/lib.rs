//! adrlit-web — Web dashboard for the ADR literature extractor.
//! Provides:
//!   - Upload / paste form with live extraction results
//!   - JSON and CSV downloads of each analysis
//!   - A small JSON API for scripted use
//!   - The `extract` command used by the CLI

pub mod analysis;
pub mod cli;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;
