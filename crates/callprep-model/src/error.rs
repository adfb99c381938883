//! Error taxonomy for identity validation.
//!
//! Every rejection is an ordinary value. The `Display` text of
//! [`IdentityError`] is returned verbatim to callers and may be shown to end
//! users, so the wording is part of the public contract.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which half of an ID pair failed its width check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdField {
    Subscriber,
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Unsupported input type. Provide a string or a key/value mapping.")]
    UnsupportedType,

    #[error(
        "Structured input did not contain acceptable fields. \
         Provide member/subscriber or first_name/last_name/dob or text."
    )]
    UnrecognizedStructuredInput,

    #[error("{}", id_format_message(.0))]
    InvalidIdFormat(IdField),

    #[error("DOB unparseable or in the future. Expected MM-DD-YYYY (or MM/DD/YYYY / YYYY-MM-DD).")]
    InvalidDob,

    #[error("Name must include at least first and last name, e.g., 'Raja Panda, 04-22-1980'.")]
    InvalidNamePart,

    #[error(
        "Input not recognized. Allowed: '#########/##' or 'First Last, MM-DD-YYYY' (comma required)."
    )]
    UnrecognizedFormat,
}

fn id_format_message(field: &IdField) -> &'static str {
    match field {
        IdField::Subscriber => "subscriber_id must be exactly 9 digits.",
        IdField::Member => "suffix/member_id must be exactly 2 digits.",
    }
}

/// Stable machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnsupportedType,
    UnrecognizedStructuredInput,
    InvalidIdFormat,
    InvalidDob,
    InvalidNamePart,
    UnrecognizedFormat,
}

impl ErrorKind {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedType => "unsupported_type",
            Self::UnrecognizedStructuredInput => "unrecognized_structured_input",
            Self::InvalidIdFormat => "invalid_id_format",
            Self::InvalidDob => "invalid_dob",
            Self::InvalidNamePart => "invalid_name_part",
            Self::UnrecognizedFormat => "unrecognized_format",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl IdentityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedType => ErrorKind::UnsupportedType,
            Self::UnrecognizedStructuredInput => ErrorKind::UnrecognizedStructuredInput,
            Self::InvalidIdFormat(_) => ErrorKind::InvalidIdFormat,
            Self::InvalidDob => ErrorKind::InvalidDob,
            Self::InvalidNamePart => ErrorKind::InvalidNamePart,
            Self::UnrecognizedFormat => ErrorKind::UnrecognizedFormat,
        }
    }

    /// Full guidance block for an end user who needs to retry.
    ///
    /// Lists both accepted identity forms and appends the specific reason.
    pub fn guidance(&self) -> String {
        format!(
            "Input not recognized.\n\n\
             Please provide ONE of the following formats:\n\
             \u{2022} Subscriber Path \u{2192} 050028449/00 (9 digits '/' 2 digits) or 05002844900 (11 digits)\n\
             \u{2022} Name+DOB Path \u{2192} First Last, MM-DD-YYYY (comma required; MM/DD/YYYY and YYYY-MM-DD accepted)\n\n\
             Details: {self}"
        )
    }
}

/// Failure to load a [`crate::FieldAliases`] override file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read alias config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid alias config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("alias group `{0}` must list at least one field name")]
    EmptyGroup(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_format_messages_name_the_field() {
        assert_eq!(
            IdentityError::InvalidIdFormat(IdField::Subscriber).to_string(),
            "subscriber_id must be exactly 9 digits."
        );
        assert_eq!(
            IdentityError::InvalidIdFormat(IdField::Member).to_string(),
            "suffix/member_id must be exactly 2 digits."
        );
        assert_eq!(
            IdentityError::InvalidIdFormat(IdField::Member).kind(),
            ErrorKind::InvalidIdFormat
        );
    }

    #[test]
    fn guidance_ends_with_details() {
        let text = IdentityError::InvalidDob.guidance();
        assert!(text.starts_with("Input not recognized."));
        assert!(text.ends_with(&format!("Details: {}", IdentityError::InvalidDob)));
    }

    #[test]
    fn kind_codes_are_snake_case() {
        assert_eq!(ErrorKind::UnsupportedType.code(), "unsupported_type");
        assert_eq!(
            serde_json::to_string(&ErrorKind::UnrecognizedStructuredInput).unwrap(),
            "\"unrecognized_structured_input\""
        );
    }
}
