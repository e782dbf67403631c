//! Compiled patterns shared by the extraction rules.
//!
//! Digit classes are ASCII-only (`[0-9]`), never `\d`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Area with its unit on the same line: "2.5 hectare", "3 acre", "1.25ha"
    pub static ref AREA_WITH_UNIT: Regex = Regex::new(
        r"(?i)([0-9]+\.?[0-9]*)\s*(hectare|acre|ha)"
    ).unwrap();

    // First bare number on a line: "2.50", "4"
    pub static ref BARE_NUMBER: Regex = Regex::new(
        r"([0-9]+\.?[0-9]*)"
    ).unwrap();

    // Survey / khasra token: "124", "124/3", "124/3A"
    pub static ref SURVEY_NUMBER: Regex = Regex::new(
        r"([0-9]+/?[0-9]*[A-Za-z]*)"
    ).unwrap();

    // Day-month-year with "/" or "-": "12/08/2022", "1-1-23"
    pub static ref DATE_DMY: Regex = Regex::new(
        r"([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{2,4})"
    ).unwrap();

    // Anchored form of DATE_DMY for parsing a captured date into parts
    pub static ref DATE_DMY_PARTS: Regex = Regex::new(
        r"^([0-9]{1,2})[/\-]([0-9]{1,2})[/\-]([0-9]{2,4})$"
    ).unwrap();
}
