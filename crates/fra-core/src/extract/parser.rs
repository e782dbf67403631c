//! Line-pair extractor: one forward pass over the lines, one-line lookahead.

use crate::models::claim::{ClaimStatus, DEFAULT_DOCUMENT_TYPE, ExtractedClaim};
use crate::models::LandType;

use super::ClaimExtractor;
use super::rules::{ClaimField, FieldValue, LineContext, RULES, Rule, RuleHit};

/// Result of an extraction together with the rule hits that produced it.
#[derive(Debug, Clone)]
pub struct ExtractionTrace {
    /// Extracted record.
    pub claim: ExtractedClaim,
    /// Every rule that wrote a value, in scan order.
    pub hits: Vec<RuleHit>,
    /// Number of non-empty lines scanned.
    pub line_count: usize,
}

/// Fields matched so far. Finalized once into an [`ExtractedClaim`].
#[derive(Debug, Clone, Default)]
struct ClaimDraft {
    issue_date: Option<String>,
    district: Option<String>,
    tehsil: Option<String>,
    pattal_holder_name: Option<String>,
    father_name: Option<String>,
    village: Option<String>,
    tribe: Option<String>,
    total_area: Option<String>,
    survey_number: Option<String>,
    land_type: Option<LandType>,
}

impl ClaimDraft {
    fn set(&mut self, field: ClaimField, value: FieldValue) {
        let value = match value {
            FieldValue::Land(land_type) => {
                if field == ClaimField::LandType {
                    self.land_type = Some(land_type);
                }
                return;
            }
            FieldValue::Text(text) => text,
        };

        let slot = match field {
            ClaimField::IssueDate => &mut self.issue_date,
            ClaimField::District => &mut self.district,
            ClaimField::Tehsil => &mut self.tehsil,
            ClaimField::PattalHolderName => &mut self.pattal_holder_name,
            ClaimField::FatherName => &mut self.father_name,
            ClaimField::Village => &mut self.village,
            ClaimField::Tribe => &mut self.tribe,
            ClaimField::TotalArea => &mut self.total_area,
            ClaimField::SurveyNumber => &mut self.survey_number,
            ClaimField::LandType => {
                self.land_type = value.parse().ok();
                return;
            }
        };
        *slot = Some(value);
    }

    fn finish(self, document_type: &str) -> ExtractedClaim {
        ExtractedClaim {
            document_type: document_type.to_string(),
            issue_date: self.issue_date.unwrap_or_default(),
            district: self.district.unwrap_or_default(),
            tehsil: self.tehsil.unwrap_or_default(),
            pattal_holder_name: self.pattal_holder_name.unwrap_or_default(),
            father_name: self.father_name.unwrap_or_default(),
            village: self.village.unwrap_or_default(),
            tribe: self.tribe.unwrap_or_default(),
            total_area: self.total_area.unwrap_or_default(),
            survey_number: self.survey_number.unwrap_or_default(),
            land_type: self.land_type,
            status: ClaimStatus::Pending,
        }
    }
}

/// Keyword extractor for scanned pattas laid out as label line, value line.
#[derive(Debug, Clone)]
pub struct LinePairExtractor {
    document_type: String,
    rules: &'static [Rule],
}

impl LinePairExtractor {
    /// Create an extractor with the standard rule table.
    pub fn new() -> Self {
        Self {
            document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
            rules: RULES,
        }
    }

    /// Set the label written into `documentType`.
    pub fn with_document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = document_type.into();
        self
    }

    /// Replace the rule table.
    pub fn with_rules(mut self, rules: &'static [Rule]) -> Self {
        self.rules = rules;
        self
    }

    /// Extract a record and report which rules fired.
    pub fn extract_with_trace(&self, text: &str) -> ExtractionTrace {
        // OCR output sometimes carries byte-order marks mid-text
        let lines: Vec<&str> = text
            .lines()
            .map(|l| l.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}'))
            .filter(|l| !l.is_empty())
            .collect();

        let mut draft = ClaimDraft::default();
        let mut hits = Vec::new();

        for (index, &line) in lines.iter().enumerate() {
            let lower = line.to_lowercase();
            let ctx = LineContext {
                index,
                line,
                lower: &lower,
                next: lines.get(index + 1).copied().unwrap_or(""),
            };

            for rule in self.rules {
                if let Some(value) = rule.apply(&ctx) {
                    hits.push(RuleHit {
                        rule: rule.name,
                        field: rule.field,
                        value: value.clone(),
                        line_index: index,
                        source: line.to_string(),
                    });
                    draft.set(rule.field, value);
                }
            }
        }

        ExtractionTrace {
            claim: draft.finish(&self.document_type),
            hits,
            line_count: lines.len(),
        }
    }
}

impl Default for LinePairExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimExtractor for LinePairExtractor {
    fn extract(&self, text: &str) -> ExtractedClaim {
        self.extract_with_trace(text).claim
    }
}
