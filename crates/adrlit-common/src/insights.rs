//! Literature insight record produced by the extractor.
//! Field names on the wire match the labels shown on the dashboard.

use serde::{Deserialize, Serialize};

/// Placeholder used when no molecule could be attributed.
pub const UNKNOWN: &str = "Unknown";

// ---------------------------------------------------------------------------
// ADR ↔ molecule link
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdrLink {
    #[serde(rename = "ADR")]
    pub adr: String,
    #[serde(rename = "Molecule")]
    pub molecule: String,
}

// ---------------------------------------------------------------------------
// Section excerpts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredSummary {
    #[serde(rename = "Background")]
    pub background: String,
    #[serde(rename = "Results")]
    pub results: String,
    #[serde(rename = "Conclusion")]
    pub conclusion: String,
}

impl StructuredSummary {
    /// Sections with content, labelled, in display order.
    pub fn non_empty(&self) -> Vec<(&'static str, &str)> {
        [
            ("Background", self.background.as_str()),
            ("Results", self.results.as_str()),
            ("Conclusion", self.conclusion.as_str()),
        ]
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
        .collect()
    }
}

// ---------------------------------------------------------------------------
// Full record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteratureInsights {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Authors")]
    pub authors: Vec<String>,
    #[serde(rename = "Study Type")]
    pub study_type: String,
    #[serde(rename = "Molecules")]
    pub molecules: Vec<String>,
    #[serde(rename = "ADRs Reported")]
    pub adrs_reported: Vec<AdrLink>,
    #[serde(rename = "AOI Molecule")]
    pub aoi_molecule: String,
    #[serde(rename = "Structured Summary")]
    pub structured_summary: StructuredSummary,
    #[serde(rename = "Medical Assessment")]
    pub medical_assessment: String,
}

impl LiteratureInsights {
    pub fn total_adrs(&self) -> usize {
        self.adrs_reported.len()
    }

    pub fn has_adrs(&self) -> bool {
        !self.adrs_reported.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LiteratureInsights {
        LiteratureInsights {
            title: "Acute dyskinesia".into(),
            authors: vec!["Jane Doe".into()],
            study_type: "Case Report".into(),
            molecules: vec!["Risperidone".into(), "Tramadol".into()],
            adrs_reported: vec![AdrLink { adr: "dyskinesia".into(), molecule: "Risperidone".into() }],
            aoi_molecule: "Tramadol".into(),
            structured_summary: StructuredSummary {
                background: "bg".into(),
                results: String::new(),
                conclusion: "done".into(),
            },
            medical_assessment: "assessment".into(),
        }
    }

    #[test]
    fn test_wire_field_names_and_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let keys = [
            "\"Title\"", "\"Authors\"", "\"Study Type\"", "\"Molecules\"",
            "\"ADRs Reported\"", "\"AOI Molecule\"", "\"Structured Summary\"",
            "\"Medical Assessment\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "keys out of order: {json}");
        assert!(json.contains(r#"{"ADR":"dyskinesia","Molecule":"Risperidone"}"#));
    }

    #[test]
    fn test_non_empty_sections_skip_blank() {
        let summary = sample().structured_summary;
        assert_eq!(summary.non_empty(), vec![("Background", "bg"), ("Conclusion", "done")]);
        assert!(StructuredSummary::default().non_empty().is_empty());
    }
}
