//! Canonical date-of-birth representation.

use std::fmt;

use chrono::NaiveDate;

/// `chrono` format string of the canonical `MM-DD-YYYY` form.
pub const CANONICAL_DATE_FORMAT: &str = "%m-%d-%Y";

/// A calendar date rendered as `MM-DD-YYYY`.
///
/// Whatever format the date was read from, it is displayed and serialized in
/// the canonical form only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a string that is already in canonical form.
    pub fn parse_canonical(value: &str) -> Option<Self> {
        NaiveDate::parse_from_str(value.trim(), CANONICAL_DATE_FORMAT)
            .ok()
            .map(Self)
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// ISO 8601 (`YYYY-MM-DD`) rendering of the same date.
    pub fn to_iso_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl From<NaiveDate> for CanonicalDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_DATE_FORMAT))
    }
}

impl serde::Serialize for CanonicalDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CanonicalDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_canonical(&s)
            .ok_or_else(|| serde::de::Error::custom("date must be in MM-DD-YYYY form"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_month_day_year() {
        let date = CanonicalDate::new(NaiveDate::from_ymd_opt(1990, 4, 5).unwrap());
        assert_eq!(date.to_string(), "04-05-1990");
        assert_eq!(date.to_iso_string(), "1990-04-05");
    }

    #[test]
    fn parse_canonical_rejects_other_forms() {
        assert!(CanonicalDate::parse_canonical("04-05-1990").is_some());
        assert!(CanonicalDate::parse_canonical("1990-04-05").is_none());
        assert!(CanonicalDate::parse_canonical("02-30-1990").is_none());
    }

    #[test]
    fn serializes_as_string() {
        let date = CanonicalDate::new(NaiveDate::from_ymd_opt(1980, 12, 31).unwrap());
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"12-31-1980\"");
        let back: CanonicalDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
