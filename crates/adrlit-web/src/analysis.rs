//! One analysis pass: extract, optionally humanize, wrap in a report.

use adrlit_common::export::{
    adrs_to_csv, to_json_pretty, CSV_CONTENT_TYPE, CSV_FILE_NAME, JSON_CONTENT_TYPE, JSON_FILE_NAME,
};
use adrlit_common::{AnalysisReport, DocumentSource, LiteratureInsights, Result};
use adrlit_ner::{humanize_insights, InsightExtractor};
use rand::Rng;
use tracing::info;

pub fn analyze<R: Rng + ?Sized>(
    extractor: &InsightExtractor,
    text: &str,
    source: DocumentSource,
    humanize: bool,
    rng: &mut R,
) -> AnalysisReport {
    let mut insights = extractor.extract(text);
    if humanize {
        humanize_insights(&mut insights, rng);
    }

    info!(
        source = %source.label(),
        molecules = insights.molecules.len(),
        adrs = insights.total_adrs(),
        humanized = humanize,
        "Analysed document"
    );

    AnalysisReport::new(text, source, humanize, insights)
}

/// Download formats offered for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn render(&self, insights: &LiteratureInsights) -> Result<String> {
        match self {
            ExportFormat::Json => to_json_pretty(insights),
            ExportFormat::Csv  => adrs_to_csv(insights),
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => JSON_FILE_NAME,
            ExportFormat::Csv  => CSV_FILE_NAME,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => JSON_CONTENT_TYPE,
            ExportFormat::Csv  => CSV_CONTENT_TYPE,
        }
    }
}
