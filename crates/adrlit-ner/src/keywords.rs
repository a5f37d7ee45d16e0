//! Case-insensitive keyword containment using an Aho-Corasick automaton.
//!
//! A keyword counts as found when it occurs anywhere in the text, including
//! inside a longer word ("tremors" contains "tremor"). Results come back in
//! dictionary order with the dictionary's spelling, one entry per keyword.

use adrlit_common::{AdrlitError, Result};
use aho_corasick::{AhoCorasick, MatchKind};

pub struct KeywordMatcher {
    automaton: AhoCorasick,
    keywords: Vec<String>,
}

impl KeywordMatcher {
    /// Build a matcher. Blank entries and case-insensitive duplicates are dropped.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        let mut unique: Vec<String> = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() || unique.iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
                continue;
            }
            unique.push(keyword.to_string());
        }

        // Standard semantics so overlapping keywords are all reported
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&unique)
            .map_err(|e| AdrlitError::Config(format!("keyword automaton: {e}")))?;

        Ok(Self { automaton, keywords: unique })
    }

    /// Keywords contained in `text`, in dictionary order.
    pub fn find(&self, text: &str) -> Vec<String> {
        let mut hit = vec![false; self.keywords.len()];
        for mat in self.automaton.find_overlapping_iter(text) {
            hit[mat.pattern().as_usize()] = true;
        }

        self.keywords
            .iter()
            .zip(hit)
            .filter_map(|(keyword, found)| found.then(|| keyword.clone()))
            .collect()
    }
}
