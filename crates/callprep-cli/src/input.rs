//! Reading and classifying CLI input.
//!
//! The validator itself never touches files or stdin; everything here runs
//! before it is called.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use callprep_model::{FieldAliases, RawInput};
use callprep_validate::IdentityValidator;
use chrono::NaiveDate;
use tracing::debug;

/// Path argument meaning "read from stdin".
pub const STDIN_MARKER: &str = "-";

/// Read all of `path`, or stdin when the path is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parse a JSON document into a classified input.
pub fn parse_json_input(json: &str) -> Result<RawInput> {
    let value: serde_json::Value = serde_json::from_str(json).context("input is not valid JSON")?;
    Ok(RawInput::from(value))
}

/// Classify one batch line: a line starting with `{` is a JSON mapping,
/// anything else is free text.
pub fn parse_batch_line(line: &str) -> Result<RawInput> {
    let trimmed = line.trim();
    if trimmed.starts_with('{') {
        return parse_json_input(trimmed);
    }
    Ok(RawInput::text(trimmed))
}

/// Non-blank lines of a batch file, numbered from 1.
pub fn batch_lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Load field aliases, falling back to the built-in defaults.
pub fn load_aliases(path: Option<&Path>) -> Result<FieldAliases> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading field aliases");
            Ok(FieldAliases::from_path(path)?)
        }
        None => Ok(FieldAliases::default()),
    }
}

/// Build the validator shared by every command.
pub fn build_validator(aliases: Option<&Path>, as_of: Option<NaiveDate>) -> Result<IdentityValidator> {
    let mut validator = IdentityValidator::new().with_aliases(load_aliases(aliases)?);
    if let Some(date) = as_of {
        validator = validator.with_reference_date(date);
    }
    Ok(validator)
}
