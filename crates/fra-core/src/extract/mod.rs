//! Field extraction from recognized patta text.

mod parser;
pub mod rules;

pub use parser::{ExtractionTrace, LinePairExtractor};
pub use rules::{ClaimField, FieldValue, Rule, RuleHit, RULES};

use crate::models::ExtractedClaim;

/// Trait for claim extractors.
///
/// Extraction is total: any input, including an empty string, yields a
/// record. Implementations perform no I/O.
pub trait ClaimExtractor {
    /// Extract a claim record from plain text.
    fn extract(&self, text: &str) -> ExtractedClaim;
}

/// Extract with the standard rule table.
pub fn extract(text: &str) -> ExtractedClaim {
    LinePairExtractor::new().extract(text)
}
