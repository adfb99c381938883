use anyhow::Result;
use callprep_model::{FieldAliases, RawInput, ValidationOutcome};
use callprep_cli::input::{
    batch_lines, build_validator, load_aliases, parse_batch_line, parse_json_input, read_source,
};
use callprep_cli::logging::redact_value;
use tracing::{info, info_span, trace, warn};

use crate::cli::{BatchArgs, FormatsArgs, ValidateArgs};
use crate::types::{BatchEntry, BatchResult, LineResult};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationOutcome> {
    let validator = build_validator(args.validator.aliases.as_deref(), args.validator.as_of)?;
    let input = match &args.json {
        Some(path) => parse_json_input(&read_source(path)?)?,
        None => RawInput::text(args.text.join(" ")),
    };
    if let RawInput::Text(text) = &input {
        trace!(input = redact_value(text), "validating free text");
    }

    let outcome = validator.validate(&input);
    log_outcome(&outcome, None);
    Ok(outcome)
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchResult> {
    let validator = build_validator(args.validator.aliases.as_deref(), args.validator.as_of)?;
    let contents = read_source(&args.path)?;
    let span = info_span!("batch", path = %args.path.display());
    let _guard = span.enter();

    let mut result = BatchResult {
        entries: Vec::new(),
        accepted: 0,
        rejected: 0,
        unreadable: 0,
    };
    for (line, raw) in batch_lines(&contents) {
        trace!(line, input = redact_value(raw), "batch line");
        let line_result = match parse_batch_line(raw) {
            Ok(input) => {
                let outcome = validator.validate(&input);
                log_outcome(&outcome, Some(line));
                if outcome.success() {
                    result.accepted += 1;
                } else {
                    result.rejected += 1;
                }
                LineResult::Validated(outcome)
            }
            Err(error) => {
                warn!(line, %error, "unreadable batch line");
                result.unreadable += 1;
                LineResult::Unreadable(format!("{error:#}"))
            }
        };
        result.entries.push(BatchEntry {
            line,
            result: line_result,
        });
    }

    info!(
        accepted = result.accepted,
        rejected = result.rejected,
        unreadable = result.unreadable,
        "batch complete"
    );
    Ok(result)
}

pub fn run_formats(args: &FormatsArgs) -> Result<FieldAliases> {
    load_aliases(args.aliases.as_deref())
}

fn log_outcome(outcome: &ValidationOutcome, line: Option<usize>) {
    match (outcome.record(), outcome.error()) {
        (Some(record), _) => info!(?line, scheme = %record.scheme(), "identity accepted"),
        (None, Some(error)) => warn!(?line, kind = %error.kind(), "identity rejected"),
        (None, None) => {}
    }
}
