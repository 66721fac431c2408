//! Tests for the validation pipeline.

use super::*;
use crate::domain::ErrorCode;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn valid_payload() -> Value {
    json!({
        "firstName": "Ana",
        "lastName": "Lee",
        "email": "ana@x.com",
        "age": 17,
        "position": "Data Analyst",
        "experience": "0-1",
        "education": "Bachelor's Degree",
        "motivation": "I want to help advance research."
    })
}

fn with(mut payload: Value, field: &str, value: Value) -> Value {
    if let Some(object) = payload.as_object_mut() {
        object.insert(field.to_owned(), value);
    }
    payload
}

fn without(mut payload: Value, field: &str) -> Value {
    if let Some(object) = payload.as_object_mut() {
        object.remove(field);
    }
    payload
}

#[rstest]
fn accepts_a_complete_payload(valid_payload: Value) {
    let validated = validate_application_input(&valid_payload).expect("valid payload");
    assert_eq!(validated.email(), "ana@x.com");
    assert_eq!(validated.age(), 17);
    assert_eq!(validated.phone(), None);
    assert_eq!(validated.skills(), None);
}

#[rstest]
#[case(15, false)]
#[case(16, true)]
#[case(100, true)]
#[case(101, false)]
fn age_bounds_are_inclusive(valid_payload: Value, #[case] age: i64, #[case] ok: bool) {
    let result = validate_application_input(&with(valid_payload, "age", json!(age)));
    assert_eq!(result.is_ok(), ok, "age {age}");
}

#[rstest]
fn underage_applicant_reports_only_age(valid_payload: Value) {
    let err = validate_application_input(&with(valid_payload, "age", json!(10)))
        .expect_err("age 10 must fail");
    let fields: Vec<&str> = err.fields().collect();
    assert_eq!(fields, vec!["age"]);
    assert_eq!(err.errors()[0].code(), FieldErrorCode::TooSmall);
    assert_eq!(err.errors()[0].message(), "Must be at least 16");
}

#[rstest]
#[case(json!("17"), "Age must be a number")]
#[case(json!(17.5), "Age must be a whole number")]
#[case(json!(true), "Age must be a number")]
fn non_integer_ages_are_type_errors(
    valid_payload: Value,
    #[case] age: Value,
    #[case] message: &str,
) {
    let err = validate_application_input(&with(valid_payload, "age", age)).expect_err("must fail");
    assert_eq!(err.errors()[0].code(), FieldErrorCode::InvalidType);
    assert_eq!(err.errors()[0].message(), message);
}

#[rstest]
fn huge_age_is_too_big(valid_payload: Value) {
    let err = validate_application_input(&with(valid_payload, "age", json!(u64::MAX)))
        .expect_err("must fail");
    assert_eq!(err.errors()[0].code(), FieldErrorCode::TooBig);
}

#[rstest]
#[case("plainaddress")]
#[case("@x.com")]
#[case("ana@")]
#[case("ana@x")]
#[case(".ana@x.com")]
#[case("an..a@x.com")]
#[case("ana@x.c")]
fn rejects_malformed_emails(valid_payload: Value, #[case] email: &str) {
    let err = validate_application_input(&with(valid_payload, "email", json!(email)))
        .expect_err("email must fail");
    assert_eq!(err.errors()[0].field(), "email");
    assert_eq!(err.errors()[0].code(), FieldErrorCode::InvalidEmail);
}

#[rstest]
#[case("ana.lee+jobs@mail.example.org")]
#[case("o'brien@x.io")]
fn accepts_well_formed_emails(valid_payload: Value, #[case] email: &str) {
    assert!(validate_application_input(&with(valid_payload, "email", json!(email))).is_ok());
}

#[rstest]
#[case("firstName")]
#[case("lastName")]
#[case("position")]
#[case("experience")]
#[case("education")]
fn blank_required_text_is_rejected(valid_payload: Value, #[case] field: &str) {
    let err = validate_application_input(&with(valid_payload, field, json!("   ")))
        .expect_err("blank must fail");
    assert_eq!(err.errors()[0].field(), field);
    assert_eq!(err.errors()[0].code(), FieldErrorCode::Required);
}

#[rstest]
fn short_motivation_is_too_short(valid_payload: Value) {
    let err = validate_application_input(&with(valid_payload, "motivation", json!("too short")))
        .expect_err("nine characters must fail");
    assert_eq!(err.errors()[0].code(), FieldErrorCode::TooShort);
    assert_eq!(
        err.errors()[0].message(),
        "Please provide at least 10 characters"
    );
}

#[rstest]
fn reports_every_violation_at_once(valid_payload: Value) {
    let payload = with(without(valid_payload, "motivation"), "age", json!(12));
    let payload = with(payload, "email", json!("nope"));

    let err = validate_application_input(&payload).expect_err("must fail");

    let fields: Vec<&str> = err.fields().collect();
    assert_eq!(fields, vec!["email", "age", "motivation"]);
}

#[rstest]
#[case(json!(null))]
#[case(json!(""))]
fn optional_fields_accept_null_and_blank(valid_payload: Value, #[case] value: Value) {
    let payload = with(with(valid_payload, "phone", value.clone()), "skills", value);
    assert!(validate_application_input(&payload).is_ok());
}

#[rstest]
fn optional_field_with_wrong_type_is_rejected(valid_payload: Value) {
    let err = validate_application_input(&with(valid_payload, "phone", json!(5550100)))
        .expect_err("number phone must fail");
    assert_eq!(err.errors()[0].field(), "phone");
    assert_eq!(err.errors()[0].code(), FieldErrorCode::InvalidType);
}

#[rstest]
fn client_supplied_identity_is_ignored(valid_payload: Value) {
    let payload = with(valid_payload, "id", json!(99));
    let payload = with(payload, "submittedAt", json!("1999-01-01T00:00:00Z"));
    assert!(validate_application_input(&payload).is_ok());
}

#[rstest]
#[case(json!([1, 2]))]
#[case(json!("text"))]
#[case(json!(null))]
fn non_object_bodies_are_rejected(#[case] body: Value) {
    let err = validate_application_input(&body).expect_err("must fail");
    assert_eq!(err.fields().collect::<Vec<_>>(), vec!["body"]);
}

#[rstest]
fn validation_error_maps_to_invalid_request_envelope(valid_payload: Value) {
    let err = validate_application_input(&with(valid_payload, "age", json!(10)))
        .expect_err("must fail");
    let domain: Error = err.into();

    assert_eq!(domain.code(), ErrorCode::InvalidRequest);
    assert_eq!(domain.message(), "Validation error");
    let details = domain.details().expect("details present");
    assert_eq!(details["errors"][0]["field"], json!("age"));
    assert_eq!(details["errors"][0]["code"], json!("too_small"));
}

#[rstest]
#[case("Admin")]
#[case("  Admin\t")]
#[case(" Admin ")]
fn login_input_keeps_username_verbatim(#[case] username: &str) {
    let creds = validate_login_input(&json!({ "username": username, "password": "pw" }))
        .expect("valid");
    assert_eq!(creds.username(), username);
    assert_eq!(creds.password(), "pw");
}

#[rstest]
#[case(json!({}), vec!["username", "password"])]
#[case(json!({ "username": "Admin" }), vec!["password"])]
#[case(json!({ "password": "pw" }), vec!["username"])]
#[case(json!({ "username": "  ", "password": "" }), vec!["username", "password"])]
#[case(json!({ "username": "Admin", "password": 42 }), vec!["password"])]
fn login_input_collects_missing_fields(#[case] body: Value, #[case] expected: Vec<&str>) {
    let err = validate_login_input(&body).expect_err("must fail");
    assert_eq!(err.fields().collect::<Vec<_>>(), expected);
}
