//! Identity validation entry point.
//!
//! Routing is a two-stage pipeline. Structured payloads first look for an
//! embedded free-text field; when one is found its text goes through the
//! same text stage as a plain string input. Otherwise the field groups are
//! checked in order: full ID pair, combined ID in a member field, then
//! Name+DOB.

use callprep_model::{
    CanonicalDate, FieldAliases, IdRecord, IdentityError, IdentityRecord, NameDobRecord, RawInput,
    ValidationOutcome,
};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::debug;

use crate::normalization::{cleanse_text, normalize_dob, normalize_dob_as_of, safe_stringify, split_name};
use crate::patterns::{IdentityPatterns, TextMatch};

/// Validates raw input into an [`IdentityRecord`].
///
/// Holds only immutable state, so one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct IdentityValidator {
    patterns: IdentityPatterns,
    aliases: FieldAliases,
    reference_date: Option<NaiveDate>,
}

impl IdentityValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom structured-field aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: FieldAliases) -> Self {
        self.aliases = aliases;
        self
    }

    /// Pin the date used to reject future dates of birth.
    ///
    /// Without this the local current date is read on every call.
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn aliases(&self) -> &FieldAliases {
        &self.aliases
    }

    pub fn patterns(&self) -> &IdentityPatterns {
        &self.patterns
    }

    /// Validate one input. Never panics and never performs I/O.
    pub fn validate(&self, input: &RawInput) -> ValidationOutcome {
        let result = match input {
            RawInput::Text(text) => self.resolve_text(text),
            RawInput::Structured(map) => self.resolve_structured(map),
            RawInput::Unsupported(_) => Err(IdentityError::UnsupportedType),
        };
        match &result {
            Ok(record) => debug!(input = input.shape(), scheme = %record.scheme(), "identity resolved"),
            Err(error) => debug!(input = input.shape(), kind = %error.kind(), "identity rejected"),
        }
        ValidationOutcome::from(result)
    }

    /// Classify a JSON value and validate it.
    pub fn validate_value(&self, value: Value) -> ValidationOutcome {
        self.validate(&RawInput::from(value))
    }

    pub fn validate_text(&self, text: &str) -> ValidationOutcome {
        self.validate(&RawInput::from(text))
    }

    fn resolve_text(&self, raw: &str) -> Result<IdentityRecord, IdentityError> {
        let text = cleanse_text(raw);
        match self.patterns.classify(&text) {
            Some(TextMatch::Id { subscriber, member }) => {
                Ok(IdRecord::new(subscriber, member)?.into())
            }
            Some(TextMatch::NameDob { name, date }) => {
                let parts = split_name(name).ok_or(IdentityError::InvalidNamePart)?;
                let dob = self.normalize_dob(date).ok_or(IdentityError::InvalidDob)?;
                Ok(NameDobRecord::new(&parts.first, &parts.last, dob)?.into())
            }
            None => Err(IdentityError::UnrecognizedFormat),
        }
    }

    fn resolve_structured(&self, map: &Map<String, Value>) -> Result<IdentityRecord, IdentityError> {
        if let Some(text) = embedded_text(map, &self.aliases.text) {
            debug!("structured input carries free text");
            return self.resolve_text(text);
        }

        let subscriber = first_present(map, &self.aliases.subscriber);
        let member = first_present(map, &self.aliases.member);
        match (subscriber.as_deref(), member.as_deref()) {
            (Some(subscriber), Some(member)) => {
                return Ok(IdRecord::new(subscriber, member)?.into());
            }
            (None, Some(combined)) => {
                if let Some(TextMatch::Id { subscriber, member }) = self.patterns.match_id(combined) {
                    debug!("member field carries the full ID");
                    return Ok(IdRecord::new(subscriber, member)?.into());
                }
            }
            _ => {}
        }

        let first = first_present(map, &self.aliases.first_name);
        let last = first_present(map, &self.aliases.last_name);
        let dob = first_present(map, &self.aliases.dob);
        if let (Some(first), Some(last), Some(dob)) = (first, last, dob) {
            let dob = self.normalize_dob(&dob).ok_or(IdentityError::InvalidDob)?;
            let parts =
                split_name(&format!("{first} {last}")).ok_or(IdentityError::InvalidNamePart)?;
            return Ok(NameDobRecord::new(&parts.first, &parts.last, dob)?.into());
        }

        Err(IdentityError::UnrecognizedStructuredInput)
    }

    fn normalize_dob(&self, raw: &str) -> Option<CanonicalDate> {
        match self.reference_date {
            Some(today) => normalize_dob_as_of(raw, today),
            None => normalize_dob(raw),
        }
    }
}

/// First free-text field holding a non-empty string.
///
/// A whitespace-only string still counts and is rejected by the text path.
fn embedded_text<'a>(map: &'a Map<String, Value>, keys: &[String]) -> Option<&'a str> {
    keys.iter().find_map(|key| match map.get(key) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.as_str()),
        _ => None,
    })
}

/// Stringified value of the first alias that yields non-empty text.
fn first_present(map: &Map<String, Value>, keys: &[String]) -> Option<String> {
    keys.iter()
        .filter_map(|key| map.get(key))
        .map(safe_stringify)
        .find(|value| !value.is_empty())
}
