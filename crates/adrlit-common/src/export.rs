//! JSON and CSV renderings of a [`LiteratureInsights`] record.

use crate::error::{AdrlitError, Result};
use crate::insights::LiteratureInsights;

pub const JSON_FILE_NAME: &str = "literature_summary.json";
pub const CSV_FILE_NAME: &str = "adrs_reported.csv";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Pretty-printed JSON (two-space indent) of the whole record.
pub fn to_json_pretty(insights: &LiteratureInsights) -> Result<String> {
    Ok(serde_json::to_string_pretty(insights)?)
}

/// The ADR table as CSV with an `ADR,Molecule` header.
///
/// Returns an empty string when no ADRs were found; callers treat that as
/// "nothing to export".
pub fn adrs_to_csv(insights: &LiteratureInsights) -> Result<String> {
    if insights.adrs_reported.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for link in &insights.adrs_reported {
        writer.serialize(link)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AdrlitError::Other(anyhow::anyhow!("flushing CSV buffer: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| AdrlitError::Other(anyhow::anyhow!("CSV output is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::{AdrLink, StructuredSummary};
    use pretty_assertions::assert_eq;

    fn insights(adrs: &[(&str, &str)]) -> LiteratureInsights {
        LiteratureInsights {
            title: "T".into(),
            authors: vec![],
            study_type: "Case Report".into(),
            molecules: vec!["Tramadol".into()],
            adrs_reported: adrs
                .iter()
                .map(|(adr, molecule)| AdrLink { adr: adr.to_string(), molecule: molecule.to_string() })
                .collect(),
            aoi_molecule: "Tramadol".into(),
            structured_summary: StructuredSummary::default(),
            medical_assessment: "A".into(),
        }
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let csv = adrs_to_csv(&insights(&[("tremor", "Tramadol"), ("involuntary movements", "Tramadol")])).unwrap();
        assert_eq!(csv, "ADR,Molecule\ntremor,Tramadol\ninvoluntary movements,Tramadol\n");
    }

    #[test]
    fn test_csv_empty_without_adrs() {
        assert_eq!(adrs_to_csv(&insights(&[])).unwrap(), "");
    }

    #[test]
    fn test_json_is_indented() {
        let json = to_json_pretty(&insights(&[("tremor", "Tramadol")])).unwrap();
        assert!(json.starts_with("{\n  \"Title\": \"T\""));
        assert!(json.contains("\"ADRs Reported\": [\n    {\n      \"ADR\": \"tremor\""));
    }
}
