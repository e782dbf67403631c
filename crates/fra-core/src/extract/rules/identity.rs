//! Label-then-value rules for the beneficiary and administrative fields.

use super::{FieldValue, LineContext};

pub fn is_holder_label(ctx: &LineContext<'_>) -> bool {
    ctx.mentions(&["patta holder", "name"])
}

pub fn is_father_label(ctx: &LineContext<'_>) -> bool {
    ctx.mentions(&["father", "s/o"])
}

pub fn is_village_label(ctx: &LineContext<'_>) -> bool {
    ctx.mentions(&["village"])
}

pub fn is_district_label(ctx: &LineContext<'_>) -> bool {
    ctx.mentions(&["district"])
}

pub fn is_tehsil_label(ctx: &LineContext<'_>) -> bool {
    ctx.mentions(&["tehsil", "taluka"])
}

pub fn is_tribe_label(ctx: &LineContext<'_>) -> bool {
    ctx.mentions(&["tribe", "community"])
}

/// The following line, verbatim.
pub fn following_line(ctx: &LineContext<'_>) -> Option<FieldValue> {
    ctx.next_line().map(FieldValue::from)
}

/// The following line, unless it is itself a father's-name label.
pub fn holder_name(ctx: &LineContext<'_>) -> Option<FieldValue> {
    ctx.next_line()
        .filter(|next| !next.to_lowercase().contains("father"))
        .map(FieldValue::from)
}

#[cfg(test)]
mod tests {
    use super::super::ctx;
    use super::*;

    #[test]
    fn test_holder_name_skips_father_label() {
        let c = ctx("Name of Patta Holder", "name of patta holder", "Father's Name");
        assert!(is_holder_label(&c));
        assert_eq!(holder_name(&c), None);

        let c = ctx("Name", "name", "Sukhram Marskole");
        assert_eq!(holder_name(&c), Some(FieldValue::from("Sukhram Marskole")));
    }

    #[test]
    fn test_labels_are_keyword_matches() {
        assert!(is_father_label(&ctx("S/O", "s/o", "x")));
        assert!(is_tehsil_label(&ctx("Taluka", "taluka", "x")));
        assert!(is_tribe_label(&ctx("Community", "community", "x")));
        assert!(!is_district_label(&ctx("Village", "village", "x")));
    }

    #[test]
    fn test_following_line_absent_at_end() {
        assert_eq!(following_line(&ctx("District", "district", "")), None);
    }
}
