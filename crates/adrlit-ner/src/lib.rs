//! Dictionary and regex based extraction of literature insights.
//!
//! Everything here is a linear scan over the document text: keyword
//! containment for drugs and adverse reactions, a capitalisation heuristic
//! for author names in the header, and three regex searches for the
//! Background / Results / Conclusion excerpts.

pub mod keywords;
pub mod authors;
pub mod sections;
pub mod humanize;
pub mod extractor;

pub use authors::AuthorRecognizer;
pub use extractor::{classify_study_type, extract_title, InsightExtractor};
pub use humanize::{humanize, humanize_insights, BASE_ASSESSMENT, HUMANIZED_VARIANTS};
pub use keywords::KeywordMatcher;
pub use sections::extract_sections;
