//! Total-area rule: inline "<number> <unit>" first, then a bare number on the next line.

use super::patterns::{AREA_WITH_UNIT, BARE_NUMBER};
use super::{FieldValue, LineContext};

pub fn is_area_line(ctx: &LineContext<'_>) -> bool {
    ctx.mentions(&["area", "hectare", "acre"])
}

pub fn capture_area(ctx: &LineContext<'_>) -> Option<FieldValue> {
    if let Some(caps) = AREA_WITH_UNIT.captures(ctx.lower) {
        return Some(FieldValue::from(&caps[1]));
    }

    ctx.next_line()
        .and_then(|next| BARE_NUMBER.captures(next))
        .map(|caps| FieldValue::from(&caps[1]))
}

#[cfg(test)]
mod tests {
    use super::super::ctx;
    use super::*;

    #[test]
    fn test_inline_area() {
        let c = ctx("Total Area 2.5 hectare", "total area 2.5 hectare", "");
        assert_eq!(capture_area(&c), Some(FieldValue::from("2.5")));

        let c = ctx("Area: 3ha", "area: 3ha", "");
        assert_eq!(capture_area(&c), Some(FieldValue::from("3")));
    }

    #[test]
    fn test_area_from_next_line() {
        let c = ctx("Total Area (in hectares)", "total area (in hectares)", "1.75 Ha.");
        // "hectares" has no number in front of it, so the next line is used
        assert_eq!(capture_area(&c), Some(FieldValue::from("1.75")));
    }

    #[test]
    fn test_area_without_number() {
        let c = ctx("Area", "area", "not recorded");
        assert_eq!(capture_area(&c), None);
    }
}
