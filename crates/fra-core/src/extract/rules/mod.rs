//! Line-pair rules for forest-rights patta extraction.
//!
//! Each [`Rule`] pairs a trigger (keywords on the current line) with a
//! capture (usually the following line). [`RULES`] is evaluated in
//! declaration order for every line, so a later rule overwrites a field an
//! earlier one set. Overlapping keywords ("village" and "district" on one
//! line) resolve by that order, not by which label is more specific.

pub mod area;
pub mod dates;
pub mod identity;
pub mod land;
pub mod patterns;
pub mod survey;

pub use dates::{find_date, parse_issue_date};

use crate::models::LandType;

/// One line of the document together with its successor.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// Zero-based index among the non-empty lines.
    pub index: usize,
    /// Trimmed line as recognized.
    pub line: &'a str,
    /// Lowercase copy of `line`, used for keyword tests.
    pub lower: &'a str,
    /// Following line, or `""` on the last line.
    pub next: &'a str,
}

impl<'a> LineContext<'a> {
    /// Whether the current line contains any of the keywords.
    pub fn mentions(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.lower.contains(k))
    }

    /// The following line, if there is one.
    pub fn next_line(&self) -> Option<&'a str> {
        (!self.next.is_empty()).then_some(self.next)
    }
}

/// Field of the extracted record a rule writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimField {
    IssueDate,
    District,
    Tehsil,
    PattalHolderName,
    FatherName,
    Village,
    Tribe,
    TotalArea,
    SurveyNumber,
    LandType,
}

impl ClaimField {
    /// Key used for the field in serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            ClaimField::IssueDate => "issueDate",
            ClaimField::District => "district",
            ClaimField::Tehsil => "tehsil",
            ClaimField::PattalHolderName => "pattalHolderName",
            ClaimField::FatherName => "fatherName",
            ClaimField::Village => "village",
            ClaimField::Tribe => "tribe",
            ClaimField::TotalArea => "totalArea",
            ClaimField::SurveyNumber => "surveyNumber",
            ClaimField::LandType => "landType",
        }
    }
}

/// Value captured by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Land(LandType),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Land(t) => t.label(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// A single extraction rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable name, reported with every hit.
    pub name: &'static str,
    /// Field the rule writes.
    pub field: ClaimField,
    /// Whether the rule applies to this line.
    pub trigger: fn(&LineContext<'_>) -> bool,
    /// Value to store when triggered; `None` leaves the field untouched.
    pub capture: fn(&LineContext<'_>) -> Option<FieldValue>,
}

impl Rule {
    /// Run the rule against one line.
    pub fn apply(&self, ctx: &LineContext<'_>) -> Option<FieldValue> {
        if (self.trigger)(ctx) {
            (self.capture)(ctx)
        } else {
            None
        }
    }
}

/// A rule firing on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    /// Name of the rule that fired.
    pub rule: &'static str,
    /// Field written.
    pub field: ClaimField,
    /// Value written.
    pub value: FieldValue,
    /// Index of the triggering line.
    pub line_index: usize,
    /// Triggering line text.
    pub source: String,
}

/// The rule table, in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "patta_holder",
        field: ClaimField::PattalHolderName,
        trigger: identity::is_holder_label,
        capture: identity::holder_name,
    },
    Rule {
        name: "father",
        field: ClaimField::FatherName,
        trigger: identity::is_father_label,
        capture: identity::following_line,
    },
    Rule {
        name: "village",
        field: ClaimField::Village,
        trigger: identity::is_village_label,
        capture: identity::following_line,
    },
    Rule {
        name: "district",
        field: ClaimField::District,
        trigger: identity::is_district_label,
        capture: identity::following_line,
    },
    Rule {
        name: "tehsil",
        field: ClaimField::Tehsil,
        trigger: identity::is_tehsil_label,
        capture: identity::following_line,
    },
    Rule {
        name: "tribe",
        field: ClaimField::Tribe,
        trigger: identity::is_tribe_label,
        capture: identity::following_line,
    },
    Rule {
        name: "total_area",
        field: ClaimField::TotalArea,
        trigger: area::is_area_line,
        capture: area::capture_area,
    },
    Rule {
        name: "survey_number",
        field: ClaimField::SurveyNumber,
        trigger: survey::is_survey_line,
        capture: survey::capture_survey_number,
    },
    Rule {
        name: "issue_date",
        field: ClaimField::IssueDate,
        trigger: dates::always,
        capture: dates::capture_date,
    },
    Rule {
        name: "land_type",
        field: ClaimField::LandType,
        trigger: land::is_land_line,
        capture: land::capture_land_type,
    },
];

/// Build a context for ad-hoc rule evaluation.
#[cfg(test)]
pub(crate) fn ctx<'a>(line: &'a str, lower: &'a str, next: &'a str) -> LineContext<'a> {
    LineContext {
        index: 0,
        line,
        lower,
        next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_matches_declaration() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "patta_holder",
                "father",
                "village",
                "district",
                "tehsil",
                "tribe",
                "total_area",
                "survey_number",
                "issue_date",
                "land_type",
            ]
        );
    }

    #[test]
    fn test_rule_apply_requires_trigger() {
        let rule = RULES.iter().find(|r| r.name == "village").unwrap();
        let lower = "district".to_string();
        assert_eq!(rule.apply(&ctx("District", &lower, "Gondia")), None);

        let lower = "village".to_string();
        assert_eq!(
            rule.apply(&ctx("Village", &lower, "Gondia")),
            Some(FieldValue::from("Gondia"))
        );
    }

    #[test]
    fn test_next_line_on_last_line() {
        let c = ctx("Village", "village", "");
        assert_eq!(c.next_line(), None);
    }
}
