//! Tests for callprep-model types.

use callprep_model::{
    CanonicalDate, IdField, IdRecord, IdentityError, IdentityRecord, LookupRequest,
    NameDobRecord, ValidationOutcome,
};
use chrono::NaiveDate;

fn jane_doe() -> NameDobRecord {
    let dob = CanonicalDate::new(NaiveDate::from_ymd_opt(1990, 4, 5).unwrap());
    NameDobRecord::new("jane", "mary doe", dob).unwrap()
}

#[test]
fn accepted_outcome_has_record_and_no_error() {
    let outcome = ValidationOutcome::accepted(IdRecord::new("050028449", "00").unwrap());
    assert!(outcome.success());
    assert!(outcome.record().is_some());
    assert!(outcome.error().is_none());
    assert!(outcome.error_message().is_none());
}

#[test]
fn rejected_outcome_has_error_and_no_record() {
    let outcome = ValidationOutcome::rejected(IdentityError::UnrecognizedFormat);
    assert!(!outcome.success());
    assert!(outcome.record().is_none());
    assert_eq!(
        outcome.error_message().as_deref(),
        Some("Input not recognized. Allowed: '#########/##' or 'First Last, MM-DD-YYYY' (comma required).")
    );
}

#[test]
fn id_outcome_wire_shape() {
    let outcome = ValidationOutcome::accepted(IdRecord::new("050028449", "00").unwrap());
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "success": true,
      "record": {
        "method": "id",
        "subscriber_id": "050028449",
        "member_id": "00",
        "full_id": "050028449/00"
      },
      "error": null
    }
    "#);
}

#[test]
fn name_dob_outcome_wire_shape() {
    let outcome = ValidationOutcome::accepted(jane_doe());
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "success": true,
      "record": {
        "method": "name_dob",
        "first_name": "jane",
        "last_name": "mary doe",
        "display_name": "Jane Mary Doe",
        "dob": "04-05-1990"
      },
      "error": null
    }
    "#);
}

#[test]
fn rejected_outcome_wire_shape() {
    let outcome = ValidationOutcome::rejected(IdentityError::InvalidIdFormat(IdField::Subscriber));
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "success": false,
      "record": null,
      "error": "subscriber_id must be exactly 9 digits."
    }
    "#);
}

#[test]
fn lookup_request_from_id_record() {
    let record = IdentityRecord::from(IdRecord::new("050028449", "01").unwrap());
    let request = LookupRequest::from(&record);
    assert_eq!(request.subscriber_id.as_deref(), Some("050028449"));
    assert_eq!(request.member_id.as_deref(), Some("01"));
    assert!(request.first_name.is_none());
    assert!(request.birth_date.is_none());
}

#[test]
fn lookup_request_uses_camel_case() {
    let record = IdentityRecord::from(jane_doe());
    insta::assert_json_snapshot!(LookupRequest::from(&record), @r#"
    {
      "subscriberId": null,
      "memberId": null,
      "firstName": "jane",
      "lastName": "mary doe",
      "birthDate": "04-05-1990"
    }
    "#);
}

#[test]
fn outcome_converts_back_into_result() {
    let outcome = ValidationOutcome::from(Err(IdentityError::InvalidDob));
    assert_eq!(outcome.into_result(), Err(IdentityError::InvalidDob));
}
