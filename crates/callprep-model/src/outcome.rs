//! The single value returned by every validation call.

use serde::ser::SerializeStruct;

use crate::error::IdentityError;
use crate::record::IdentityRecord;

/// Result of validating one input.
///
/// Exactly one of record and error is present. The fields are private so
/// the only way to build an outcome is through [`ValidationOutcome::accepted`]
/// or [`ValidationOutcome::rejected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    result: Result<IdentityRecord, IdentityError>,
}

impl ValidationOutcome {
    pub fn accepted(record: impl Into<IdentityRecord>) -> Self {
        Self {
            result: Ok(record.into()),
        }
    }

    pub fn rejected(error: IdentityError) -> Self {
        Self { result: Err(error) }
    }

    pub fn success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn record(&self) -> Option<&IdentityRecord> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&IdentityError> {
        self.result.as_ref().err()
    }

    /// The contract error string, verbatim.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn into_result(self) -> Result<IdentityRecord, IdentityError> {
        self.result
    }
}

impl From<Result<IdentityRecord, IdentityError>> for ValidationOutcome {
    fn from(result: Result<IdentityRecord, IdentityError>) -> Self {
        Self { result }
    }
}

impl serde::Serialize for ValidationOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationOutcome", 3)?;
        state.serialize_field("success", &self.success())?;
        state.serialize_field("record", &self.record())?;
        state.serialize_field("error", &self.error_message())?;
        state.end()
    }
}
