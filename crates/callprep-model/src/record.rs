//! Validated identity records.
//!
//! An [`IdentityRecord`] is either an ID pair or a Name+DOB pair, never
//! both. Constructors enforce the field invariants so a record that exists
//! is always well formed.

use std::fmt;

use serde::Serialize;

use crate::date::CanonicalDate;
use crate::error::{IdField, IdentityError};

pub const SUBSCRIBER_ID_LEN: usize = 9;
pub const MEMBER_ID_LEN: usize = 2;

/// The identity scheme a record was resolved through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Id,
    NameDob,
}

impl Scheme {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::NameDob => "name_dob",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Subscriber/member ID pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IdRecord {
    subscriber_id: String,
    member_id: String,
    full_id: String,
}

impl IdRecord {
    /// Build a record from a 9-digit subscriber ID and a 2-digit member ID.
    ///
    /// Both values must consist of ASCII digits only; the subscriber is
    /// checked first.
    pub fn new(subscriber_id: &str, member_id: &str) -> Result<Self, IdentityError> {
        if !is_fixed_digits(subscriber_id, SUBSCRIBER_ID_LEN) {
            return Err(IdentityError::InvalidIdFormat(IdField::Subscriber));
        }
        if !is_fixed_digits(member_id, MEMBER_ID_LEN) {
            return Err(IdentityError::InvalidIdFormat(IdField::Member));
        }
        Ok(Self {
            subscriber_id: subscriber_id.to_string(),
            member_id: member_id.to_string(),
            full_id: format!("{subscriber_id}/{member_id}"),
        })
    }

    pub fn subscriber_id(&self) -> &str {
        &self.subscriber_id
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    /// `subscriber_id/member_id`
    pub fn full_id(&self) -> &str {
        &self.full_id
    }
}

/// Full name plus date of birth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NameDobRecord {
    first_name: String,
    last_name: String,
    display_name: String,
    dob: CanonicalDate,
}

impl NameDobRecord {
    /// Build a record from already split name parts.
    ///
    /// Names are stored lowercased; the display name is derived from them.
    /// The last name may contain spaces (multi-token surnames).
    pub fn new(first_name: &str, last_name: &str, dob: CanonicalDate) -> Result<Self, IdentityError> {
        let first_name = first_name.trim().to_lowercase();
        let last_name = last_name.trim().to_lowercase();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(IdentityError::InvalidNamePart);
        }
        let display_name = format!("{} {}", title_case(&first_name), title_case(&last_name));
        Ok(Self {
            first_name,
            last_name,
            display_name,
            dob,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn dob(&self) -> CanonicalDate {
        self.dob
    }
}

/// A validated identity reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum IdentityRecord {
    Id(IdRecord),
    NameDob(NameDobRecord),
}

impl IdentityRecord {
    pub fn scheme(&self) -> Scheme {
        match self {
            Self::Id(_) => Scheme::Id,
            Self::NameDob(_) => Scheme::NameDob,
        }
    }

    pub fn as_id(&self) -> Option<&IdRecord> {
        match self {
            Self::Id(record) => Some(record),
            Self::NameDob(_) => None,
        }
    }

    pub fn as_name_dob(&self) -> Option<&NameDobRecord> {
        match self {
            Self::Id(_) => None,
            Self::NameDob(record) => Some(record),
        }
    }
}

impl From<IdRecord> for IdentityRecord {
    fn from(record: IdRecord) -> Self {
        Self::Id(record)
    }
}

impl From<NameDobRecord> for IdentityRecord {
    fn from(record: NameDobRecord) -> Self {
        Self::NameDob(record)
    }
}

/// Title-case each word: the first letter of every run of letters is
/// uppercased and the rest lowercased, so `o'neil-smith` becomes
/// `O'Neil-Smith`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for c in value.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }
    out
}

fn is_fixed_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn dob() -> CanonicalDate {
        CanonicalDate::new(NaiveDate::from_ymd_opt(1990, 4, 5).unwrap())
    }

    #[test]
    fn id_record_derives_full_id() {
        let record = IdRecord::new("050028449", "00").unwrap();
        assert_eq!(record.full_id(), "050028449/00");
    }

    #[test]
    fn id_record_checks_subscriber_before_member() {
        assert_eq!(
            IdRecord::new("12345", "0").unwrap_err(),
            IdentityError::InvalidIdFormat(IdField::Subscriber)
        );
        assert_eq!(
            IdRecord::new("123456789", "0a").unwrap_err(),
            IdentityError::InvalidIdFormat(IdField::Member)
        );
    }

    #[test]
    fn id_record_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not accepted as ID characters.
        assert!(IdRecord::new("\u{0660}\u{0661}\u{0662}\u{0663}\u{0664}\u{0665}\u{0666}\u{0667}\u{0668}", "00").is_err());
    }

    #[test]
    fn name_dob_record_lowercases_and_titles() {
        let record = NameDobRecord::new("JANE", "Mary DOE", dob()).unwrap();
        assert_eq!(record.first_name(), "jane");
        assert_eq!(record.last_name(), "mary doe");
        assert_eq!(record.display_name(), "Jane Mary Doe");
    }

    #[test]
    fn name_dob_record_requires_both_names() {
        assert_eq!(
            NameDobRecord::new("jane", "  ", dob()).unwrap_err(),
            IdentityError::InvalidNamePart
        );
    }

    #[test]
    fn title_case_handles_punctuation() {
        assert_eq!(title_case("o'neil-smith"), "O'Neil-Smith");
        assert_eq!(title_case("mary doe"), "Mary Doe");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn scheme_labels() {
        let record: IdentityRecord = IdRecord::new("050028449", "00").unwrap().into();
        assert_eq!(record.scheme(), Scheme::Id);
        assert_eq!(record.scheme().to_string(), "id");
        assert!(record.as_name_dob().is_none());
    }
}
