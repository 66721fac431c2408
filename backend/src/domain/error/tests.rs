//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("nope"), ErrorCode::Unauthorized)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn trace_id_is_captured_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid trace id");
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn redaction_hides_internal_detail_but_keeps_trace() {
    let error = Error::internal("database on fire")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "secret": "x" }));

    let redacted = error.redacted();

    assert_eq!(redacted.message(), "Internal server error");
    assert!(redacted.details().is_none());
    assert_eq!(redacted.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn redaction_leaves_client_errors_untouched() {
    let error = Error::invalid_request("Validation error").with_details(json!({ "errors": [] }));
    assert_eq!(error.redacted(), error);
}

#[rstest]
fn serialises_in_camel_case_without_empty_fields() {
    let value = serde_json::to_value(Error::not_found("missing").with_trace_id(TRACE_ID))
        .expect("serialise error");
    assert_eq!(
        value,
        json!({ "code": "not_found", "message": "missing", "traceId": TRACE_ID })
    );
}
