//! adrlit-common — Shared types, errors and export formats used across all adrlit crates.

pub mod error;
pub mod insights;
pub mod export;
pub mod report;

// Re-export commonly used types
pub use error::{AdrlitError, ApiError, Result};
pub use insights::{AdrLink, LiteratureInsights, StructuredSummary, UNKNOWN};
pub use report::{AnalysisReport, DocumentSource};
