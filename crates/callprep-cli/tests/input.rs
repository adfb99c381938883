//! Integration tests for CLI input handling.

use std::fs;
use std::path::PathBuf;

use callprep_cli::input::{batch_lines, build_validator, parse_batch_line, parse_json_input};
use callprep_cli::logging::{REDACTED_VALUE, redact_value};
use callprep_model::RawInput;
use chrono::NaiveDate;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "callprep-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn batch_line_classification() {
    assert_eq!(
        parse_batch_line("  050028449/00 ").unwrap(),
        RawInput::text("050028449/00")
    );
    assert_eq!(
        parse_batch_line(r#"{"subscriber_id": "050028449", "member_id": "00"}"#)
            .unwrap()
            .shape(),
        "structured"
    );
    assert!(parse_batch_line("{not json").is_err());
}

#[test]
fn json_input_keeps_shape() {
    assert_eq!(parse_json_input(r#""Jane Doe, 04-05-1990""#).unwrap().shape(), "text");
    assert_eq!(parse_json_input("42").unwrap().shape(), "unsupported");
    assert!(parse_json_input("").is_err());
}

#[test]
fn batch_lines_skip_blanks_and_keep_numbers() {
    let contents = "050028449/00\n\n   \nJane Doe, 04-05-1990\n";
    let lines: Vec<(usize, &str)> = batch_lines(contents).collect();
    assert_eq!(lines, vec![(1, "050028449/00"), (4, "Jane Doe, 04-05-1990")]);
}

#[test]
fn validator_with_alias_file_and_reference_date() {
    let dir = unique_temp_dir("aliases");
    let path = dir.join("aliases.json");
    fs::write(&path, r#"{"dob": ["birth_dt"]}"#).unwrap();

    let as_of = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let validator = build_validator(Some(&path), Some(as_of)).unwrap();
    let outcome = validator.validate_value(serde_json::json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "birth_dt": "04-05-1990"
    }));
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "success": true,
      "record": {
        "method": "name_dob",
        "first_name": "jane",
        "last_name": "doe",
        "display_name": "Jane Doe",
        "dob": "04-05-1990"
      },
      "error": null
    }
    "#);

    // 2005 is in the future relative to the pinned date.
    let outcome = validator.validate_text("Jane Doe, 2005-01-01");
    assert_eq!(outcome.error().map(|e| e.kind().code()), Some("invalid_dob"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_alias_file_is_an_error() {
    let dir = unique_temp_dir("missing");
    let result = build_validator(Some(&dir.join("nope.json")), None);
    assert!(result.is_err());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn values_are_redacted_by_default() {
    assert_eq!(redact_value("050028449/00"), REDACTED_VALUE);
}
