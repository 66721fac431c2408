//! Tests for HTTP error mapping.

use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn body_of(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, header, value)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let err = Error::invalid_request("Validation error")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "errors": [{ "field": "age" }] }));

    let (status, header, body) = body_of(&err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({
            "success": false,
            "code": "invalid_request",
            "message": "Validation error",
            "traceId": TRACE_ID,
            "details": { "errors": [{ "field": "age" }] }
        })
    );
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let err = Error::internal("connection string leaked")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "secret": "x" }));

    let (status, header, body) = body_of(&err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({
            "success": false,
            "code": "internal_error",
            "message": "Internal server error",
            "traceId": TRACE_ID
        })
    );
}

#[actix_web::test]
async fn missing_trace_id_omits_header_and_field() {
    let (_, header, body) = body_of(&Error::not_found("Application not found")).await;
    assert!(header.is_none());
    assert!(body.get("traceId").is_none());
    assert!(body.get("details").is_none());
}
