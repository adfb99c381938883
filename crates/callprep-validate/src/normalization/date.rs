//! Date-of-birth normalization.
//!
//! Accepts three fixed formats and always produces the canonical
//! `MM-DD-YYYY` form. Dates of birth in the future are rejected.

use callprep_model::CanonicalDate;
use chrono::{Datelike, Local, NaiveDate};

/// Accepted input formats, tried in order.
pub const DOB_FORMATS: [&str; 3] = ["%m-%d-%Y", "%m/%d/%Y", "%Y-%m-%d"];

/// Normalize a date of birth against today's local date.
pub fn normalize_dob(raw: &str) -> Option<CanonicalDate> {
    normalize_dob_as_of(raw, Local::now().date_naive())
}

/// Normalize a date of birth, rejecting anything later than `today`.
///
/// If no format matches as written, every `/` is replaced with `-` and the
/// formats are tried once more, which accepts mixed separators such as
/// `04/05-1990`. Whitespace inside the date and years before 1 are rejected.
pub fn normalize_dob_as_of(raw: &str, today: NaiveDate) -> Option<CanonicalDate> {
    let trimmed = raw.trim();
    // chrono skips blanks ahead of numeric fields, so `04- 05-1990` would parse.
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return None;
    }

    let parsed = try_parse_dob(trimmed).or_else(|| try_parse_dob(&trimmed.replace('/', "-")))?;
    if parsed.year() < 1 || parsed > today {
        return None;
    }
    Some(CanonicalDate::new(parsed))
}

fn try_parse_dob(value: &str) -> Option<NaiveDate> {
    DOB_FORMATS
        .iter()
        .filter(|fmt| has_four_digit_year(value, fmt))
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// `%Y` alone would accept one to four digits; a DOB year is always four.
fn has_four_digit_year(value: &str, fmt: &str) -> bool {
    let mut parts = value.split(['-', '/']);
    let year = if fmt.starts_with("%Y") {
        parts.next()
    } else {
        parts.last()
    };
    year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
}
