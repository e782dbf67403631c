//! Date rule and parsing of captured dates.

use chrono::NaiveDate;

use super::patterns::{DATE_DMY, DATE_DMY_PARTS};
use super::{FieldValue, LineContext};

/// Every line is checked for a date.
pub fn always(_ctx: &LineContext<'_>) -> bool {
    true
}

pub fn capture_date(ctx: &LineContext<'_>) -> Option<FieldValue> {
    find_date(ctx.line).map(FieldValue::from)
}

/// First day-month-year substring in `text`, as written.
pub fn find_date(text: &str) -> Option<&str> {
    DATE_DMY.find(text).map(|m| m.as_str())
}

/// Parse a captured `D/M/Y` or `D-M-Y` date.
///
/// Two-digit years 00-50 map to 20xx and 51-99 to 19xx. Three-digit years
/// and impossible calendar dates yield `None`.
pub fn parse_issue_date(raw: &str) -> Option<NaiveDate> {
    let caps = DATE_DMY_PARTS.captures(raw.trim())?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year = parse_year(&caps[3])?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    match s.len() {
        2 if year <= 50 => Some(2000 + year),
        2 => Some(1900 + year),
        4 => Some(year),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_date() {
        assert_eq!(find_date("Issued on 12/08/2022 at Gondia"), Some("12/08/2022"));
        assert_eq!(find_date("Date: 5-1-23"), Some("5-1-23"));
        assert_eq!(find_date("Survey No 124/3A"), None);
    }

    #[test]
    fn test_parse_issue_date() {
        assert_eq!(parse_issue_date("12/08/2022"), NaiveDate::from_ymd_opt(2022, 8, 12));
        assert_eq!(parse_issue_date("5-1-23"), NaiveDate::from_ymd_opt(2023, 1, 5));
        assert_eq!(parse_issue_date("01/01/98"), NaiveDate::from_ymd_opt(1998, 1, 1));
    }

    #[test]
    fn test_parse_issue_date_rejects_invalid() {
        assert_eq!(parse_issue_date("31/02/2022"), None);
        assert_eq!(parse_issue_date("12/08/202"), None);
        assert_eq!(parse_issue_date(""), None);
    }
}
