//! Background / Results / Conclusion excerpts.
//!
//! Three independent searches, all case-insensitive with `.` matching
//! newlines. Each section runs from its keyword to the earliest following
//! terminator keyword; Conclusion runs to the end of the text.

use adrlit_common::StructuredSummary;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BACKGROUND_RE: Regex =
        Regex::new(r"(?is)background(.*?)(?:methods|case|results|discussion|conclusion)")
            .expect("background pattern compiles");
    static ref RESULTS_RE: Regex =
        Regex::new(r"(?is)results?(.*?)(?:discussion|conclusion)")
            .expect("results pattern compiles");
    static ref CONCLUSION_RE: Regex =
        Regex::new(r"(?is)conclusion(.*)")
            .expect("conclusion pattern compiles");
}

pub fn extract_sections(text: &str) -> StructuredSummary {
    StructuredSummary {
        background: capture(&BACKGROUND_RE, text),
        results: capture(&RESULTS_RE, text),
        conclusion: capture(&CONCLUSION_RE, text),
    }
}

fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_three_sections() {
        let text = "Title\nBackground\nTramadol is an opioid.\nCase presentation\nA 34-year-old man.\n\
                    Results\nSymptoms resolved.\nDiscussion\nRare.\nConclusion\nAvoid the combination.";
        let summary = extract_sections(text);
        assert_eq!(summary.background, "Tramadol is an opioid.");
        assert_eq!(summary.results, "Symptoms resolved.");
        assert_eq!(summary.conclusion, "Avoid the combination.");
    }

    #[test]
    fn test_background_stops_at_earliest_terminator() {
        let summary = extract_sections("BACKGROUND: interactions matter. Methods: review. Results: none.");
        assert_eq!(summary.background, ": interactions matter.");
    }

    #[test]
    fn test_plural_conclusions_heading_keeps_suffix() {
        let summary = extract_sections("Conclusions: stop tramadol.");
        assert_eq!(summary.conclusion, "s: stop tramadol.");
    }

    #[test]
    fn test_result_singular_matches() {
        let summary = extract_sections("As a result the tremor faded. Discussion follows.");
        assert_eq!(summary.results, "the tremor faded.");
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let summary = extract_sections("Nothing structured here.");
        assert_eq!(summary, StructuredSummary::default());
    }

    #[test]
    fn test_background_without_terminator_is_empty() {
        let summary = extract_sections("Background only, no other headings");
        assert_eq!(summary.background, "");
    }
}
