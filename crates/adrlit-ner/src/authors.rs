//! Person-name recognition for the author byline.
//!
//! Author lists sit between the title and the first section heading, so
//! only that header block is scanned. A candidate name is 2-4 capitalised
//! tokens (initials allowed, surname last) with no stop word in it.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// Lines that open the body of the paper and end the header block.
    static ref SECTION_HEADING_RE: Regex = Regex::new(
        r"(?i)^\s*(abstract|background|introduction|case\b|methods?|results?|summary|keywords?)"
    ).expect("section heading pattern compiles");

    static ref BYLINE_PREFIX_RE: Regex = Regex::new(r"(?i)^\s*(authors?\s*:|by\s+)")
        .expect("byline prefix pattern compiles");

    /// Author separators: comma, semicolon, ampersand and a standalone "and".
    static ref SEPARATOR_RE: Regex = Regex::new(r"\s*(?:[,;&]|\band\b)\s*")
        .expect("separator pattern compiles");

    static ref NAME_WORD_RE: Regex = Regex::new(r"^(?:[A-Z]'|Ma?c)?[A-Z][a-z]+(?:-(?:[A-Z]'|Ma?c)?[A-Z][a-z]+)*$")
        .expect("name word pattern compiles");

    static ref INITIAL_RE: Regex = Regex::new(r"^[A-Z]\.(?:-?[A-Z]\.)*$")
        .expect("initial pattern compiles");
}

/// Degrees and post-nominals dropped from the end of a name.
const POST_NOMINALS: &[&str] = &[
    "md", "phd", "mbbs", "dm", "mph", "msc", "bsc", "ms", "do", "pharmd", "rn", "frcp", "mrcpsych",
];

const STOP_WORDS: &[&str] = &[
    // document structure
    "abstract", "background", "introduction", "case", "report", "reports", "study", "review",
    "original", "article", "letter", "letters", "volume", "vol", "issue", "doi", "received",
    "accepted", "published", "correspondence", "email", "journal", "annals", "archives",
    // institutions and places
    "department", "university", "hospital", "college", "institute", "school", "faculty",
    "division", "unit", "center", "centre", "clinic", "foundation", "society", "national",
    "international", "general", "state", "states", "united", "kingdom", "india", "usa",
    "american", "british", "european",
    // clinical vocabulary
    "medicine", "medical", "clinical", "research", "science", "sciences", "health", "psychiatry",
    "psychiatric", "neurology", "pharmacology", "pharmacy", "neuroscience", "therapy",
    "therapeutics", "drug", "drugs", "disorder", "disorders", "syndrome", "adverse", "reaction",
    "reactions", "interaction", "acute", "chronic", "tardive", "induced", "movement", "movements",
    "patient", "patients",
    // months
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

pub struct AuthorRecognizer {
    header_lines: usize,
    stop_words: HashSet<String>,
}

impl Default for AuthorRecognizer {
    fn default() -> Self {
        Self::new(12, &[] as &[String])
    }
}

impl AuthorRecognizer {
    /// `extra_stop_words` typically carries the drug and ADR dictionaries so
    /// "Tramadol Toxicity" is never read as a person.
    pub fn new<S: AsRef<str>>(header_lines: usize, extra_stop_words: &[S]) -> Self {
        let stop_words = STOP_WORDS
            .iter()
            .map(|w| w.to_string())
            .chain(
                extra_stop_words
                    .iter()
                    .flat_map(|w| w.as_ref().split_whitespace().map(str::to_lowercase).collect::<Vec<_>>()),
            )
            .collect();
        Self { header_lines, stop_words }
    }

    /// Names found in the header block, de-duplicated, in order of appearance.
    pub fn recognize(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for line in header_block(text, self.header_lines) {
            let line = BYLINE_PREFIX_RE.replace(line, "");
            for piece in SEPARATOR_RE.split(&line) {
                if let Some(name) = self.parse_name(piece) {
                    if seen.insert(name.clone()) {
                        names.push(name);
                    }
                }
            }
        }

        debug!("Recognised {} author names", names.len());
        names
    }

    fn parse_name(&self, piece: &str) -> Option<String> {
        // Affiliation markers: digits, asterisks, daggers, superscripts
        let cleaned: String = piece
            .chars()
            .filter(|c| !c.is_ascii_digit() && !matches!(*c, '*' | '†' | '‡' | '§' | '¹' | '²' | '³'))
            .collect();

        let mut tokens: Vec<&str> = cleaned
            .split_whitespace()
            .map(|t| t.trim_end_matches(|c: char| c == ',' || c == ';'))
            .filter(|t| !t.is_empty())
            .collect();
        while tokens
            .last()
            .is_some_and(|t| POST_NOMINALS.contains(&t.trim_end_matches('.').to_lowercase().as_str()))
        {
            tokens.pop();
        }

        if !(2..=4).contains(&tokens.len()) {
            return None;
        }
        let surname = tokens.last()?;
        if !NAME_WORD_RE.is_match(surname) {
            return None;
        }
        let well_formed = tokens
            .iter()
            .all(|t| NAME_WORD_RE.is_match(t) || INITIAL_RE.is_match(t));
        let has_stop_word = tokens
            .iter()
            .any(|t| self.stop_words.contains(&t.to_lowercase()));

        (well_formed && !has_stop_word).then(|| tokens.join(" "))
    }
}

/// Lines after the title up to the first section heading, capped at `limit`.
fn header_block(text: &str, limit: usize) -> impl Iterator<Item = &str> {
    text.lines()
        .skip(1)
        .take(limit)
        .take_while(|line| !SECTION_HEADING_RE.is_match(line))
        .filter(|line| !line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comma_separated_byline() {
        let text = "Tramadol-induced dyskinesia\nJane Doe, John A. Smith and Mary-Ann O'Neil\nBackground\n...";
        let names = AuthorRecognizer::default().recognize(text);
        assert_eq!(names, vec!["Jane Doe", "John A. Smith", "Mary-Ann O'Neil"]);
    }

    #[test]
    fn test_affiliation_markers_and_degrees() {
        let text = "Title\nPriya Sharma1*, Rahul K. Verma2, MD\nDepartment of Psychiatry, General Hospital\nAbstract";
        let names = AuthorRecognizer::default().recognize(text);
        assert_eq!(names, vec!["Priya Sharma", "Rahul K. Verma"]);
    }

    #[test]
    fn test_byline_prefix() {
        let text = "Title\nAuthors: Li Wei; Ana Costa\nIntroduction";
        assert_eq!(AuthorRecognizer::default().recognize(text), vec!["Li Wei", "Ana Costa"]);

        let text = "Title\nBy Jane Doe\nCase presentation";
        assert_eq!(AuthorRecognizer::default().recognize(text), vec!["Jane Doe"]);
    }

    #[test]
    fn test_body_is_not_scanned() {
        let text = "Title\nBackground\nJohn Smith reported tremor.";
        assert!(AuthorRecognizer::default().recognize(text).is_empty());
    }

    #[test]
    fn test_dictionary_terms_are_not_names() {
        let recognizer = AuthorRecognizer::new(12, &["Risperidone", "involuntary movements"]);
        let text = "Title\nRisperidone Toxicity\nJane Doe\nAbstract";
        assert_eq!(recognizer.recognize(text), vec!["Jane Doe"]);
    }

    #[test]
    fn test_duplicates_removed() {
        let text = "Title\nJane Doe, Jane Doe\nJane Doe\nAbstract";
        assert_eq!(AuthorRecognizer::default().recognize(text), vec!["Jane Doe"]);
    }

    #[test]
    fn test_header_line_limit() {
        let text = "Title\nfiller\nJane Doe";
        assert!(AuthorRecognizer::new(1, &[] as &[String]).recognize(text).is_empty());
        assert_eq!(AuthorRecognizer::new(2, &[] as &[String]).recognize(text), vec!["Jane Doe"]);
    }
}
