//! Survey / khasra number rule. The token is read from the labelled line itself.

use super::patterns::SURVEY_NUMBER;
use super::{FieldValue, LineContext};

pub fn is_survey_line(ctx: &LineContext<'_>) -> bool {
    ctx.mentions(&["survey", "khasra"])
}

pub fn capture_survey_number(ctx: &LineContext<'_>) -> Option<FieldValue> {
    SURVEY_NUMBER
        .captures(ctx.line)
        .map(|caps| FieldValue::from(&caps[1]))
}

#[cfg(test)]
mod tests {
    use super::super::ctx;
    use super::*;

    #[test]
    fn test_survey_number_keeps_case() {
        let c = ctx("Survey No 124/3A", "survey no 124/3a", "");
        assert_eq!(capture_survey_number(&c), Some(FieldValue::from("124/3A")));
    }

    #[test]
    fn test_khasra_number() {
        let c = ctx("Khasra No. 45", "khasra no. 45", "");
        assert!(is_survey_line(&c));
        assert_eq!(capture_survey_number(&c), Some(FieldValue::from("45")));
    }

    #[test]
    fn test_survey_label_without_number() {
        let c = ctx("Survey Number", "survey number", "124/3A");
        assert_eq!(capture_survey_number(&c), None);
    }
}
