//! Assemble a [`LiteratureInsights`] record from raw document text.

use adrlit_common::{AdrLink, LiteratureInsights, Result, UNKNOWN};
use adrlit_config::ExtractionConfig;
use tracing::debug;

use crate::authors::AuthorRecognizer;
use crate::humanize::BASE_ASSESSMENT;
use crate::keywords::KeywordMatcher;
use crate::sections::extract_sections;

pub const CASE_REPORT: &str = "Case Report";
pub const LITERATURE_STUDY: &str = "Literature Study";

/// The first line of the document, trimmed. Empty when that line is blank.
pub fn extract_title(text: &str) -> String {
    text.lines().next().unwrap_or("").trim().to_string()
}

/// "Case Report" whenever the word "case" appears anywhere, case-insensitively.
pub fn classify_study_type(text: &str) -> &'static str {
    if text.to_lowercase().contains("case") {
        CASE_REPORT
    } else {
        LITERATURE_STUDY
    }
}

pub struct InsightExtractor {
    drugs: KeywordMatcher,
    adrs: KeywordMatcher,
    authors: AuthorRecognizer,
}

impl InsightExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let dictionary: Vec<&String> = config
            .drug_keywords
            .iter()
            .chain(config.adr_terms.iter())
            .collect();

        Ok(Self {
            drugs: KeywordMatcher::new(&config.drug_keywords)?,
            adrs: KeywordMatcher::new(&config.adr_terms)?,
            authors: AuthorRecognizer::new(config.author_header_lines, &dictionary),
        })
    }

    /// Extractor over the built-in drug and ADR dictionaries.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&ExtractionConfig::default())
    }

    pub fn extract(&self, text: &str) -> LiteratureInsights {
        let molecules = self.drugs.find(text);
        let adrs = self.adrs.find(text);

        // All ADRs are attributed to the first detected molecule
        let attributed = molecules.first().map(String::as_str).unwrap_or(UNKNOWN);
        let adrs_reported: Vec<AdrLink> = adrs
            .into_iter()
            .map(|adr| AdrLink { adr, molecule: attributed.to_string() })
            .collect();

        let aoi_molecule = molecules.last().cloned().unwrap_or_else(|| UNKNOWN.to_string());

        let insights = LiteratureInsights {
            title: extract_title(text),
            authors: self.authors.recognize(text),
            study_type: classify_study_type(text).to_string(),
            molecules,
            adrs_reported,
            aoi_molecule,
            structured_summary: extract_sections(text),
            medical_assessment: BASE_ASSESSMENT.to_string(),
        };

        debug!(
            title = %insights.title,
            molecules = insights.molecules.len(),
            adrs = insights.adrs_reported.len(),
            authors = insights.authors.len(),
            "Extracted literature insights"
        );

        insights
    }
}
