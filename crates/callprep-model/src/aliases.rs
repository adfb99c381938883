//! Structured-field name configuration.
//!
//! Each group is an ordered list of keys; the first key holding a usable
//! value wins. Defaults cover the snake_case, camelCase and short spellings
//! seen from upstream callers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Ordered field-name aliases for every structured field group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldAliases {
    /// Keys that may carry free text to run through the text path.
    pub text: Vec<String>,
    pub subscriber: Vec<String>,
    pub member: Vec<String>,
    pub first_name: Vec<String>,
    pub last_name: Vec<String>,
    pub dob: Vec<String>,
}

impl Default for FieldAliases {
    fn default() -> Self {
        Self {
            text: owned(&["text", "query", "message", "input", "user_message", "topic"]),
            subscriber: owned(&["subscriber_id", "subscriberId", "subscriber"]),
            member: owned(&[
                "member_id",
                "memberId",
                "member",
                "suffix",
                "member_suffix",
                "suffix_id",
            ]),
            first_name: owned(&["first_name", "firstName", "fname"]),
            last_name: owned(&["last_name", "lastName", "lname"]),
            dob: owned(&["dob", "date_of_birth", "birthdate", "birthDate"]),
        }
    }
}

impl FieldAliases {
    /// Parse overrides from JSON. Groups left out keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let aliases: Self = serde_json::from_str(json)?;
        aliases.check()?;
        Ok(aliases)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Groups in routing order, paired with their names.
    pub fn groups(&self) -> [(&'static str, &[String]); 6] {
        [
            ("text", self.text.as_slice()),
            ("subscriber", self.subscriber.as_slice()),
            ("member", self.member.as_slice()),
            ("first_name", self.first_name.as_slice()),
            ("last_name", self.last_name.as_slice()),
            ("dob", self.dob.as_slice()),
        ]
    }

    fn check(&self) -> Result<(), ConfigError> {
        for (name, keys) in self.groups() {
            if keys.iter().all(|key| key.trim().is_empty()) {
                return Err(ConfigError::EmptyGroup(name));
            }
        }
        Ok(())
    }
}

fn owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| (*key).to_string()).collect()
}
