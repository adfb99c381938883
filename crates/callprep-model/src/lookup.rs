//! Request shape for the downstream patient lookup.

use serde::Serialize;

use crate::record::IdentityRecord;

/// Parameters for a patient-data lookup.
///
/// Exactly one scheme's fields are populated; the other side is `null` on
/// the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub subscriber_id: Option<String>,
    pub member_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Canonical `MM-DD-YYYY`.
    pub birth_date: Option<String>,
}

impl From<&IdentityRecord> for LookupRequest {
    fn from(record: &IdentityRecord) -> Self {
        match record {
            IdentityRecord::Id(id) => Self {
                subscriber_id: Some(id.subscriber_id().to_string()),
                member_id: Some(id.member_id().to_string()),
                ..Self::default()
            },
            IdentityRecord::NameDob(person) => Self {
                first_name: Some(person.first_name().to_string()),
                last_name: Some(person.last_name().to_string()),
                birth_date: Some(person.dob().to_string()),
                ..Self::default()
            },
        }
    }
}
