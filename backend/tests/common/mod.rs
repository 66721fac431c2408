//! Shared fixtures for the HTTP integration suites.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use chrono::{DateTime, TimeZone, Utc};
use rstest::fixture;
use serde_json::{Value, json};

use hiring_backend::domain::TRACE_ID_HEADER;

/// Fixed start time for every scenario.
#[fixture]
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// A submission that passes validation.
pub fn application(first_name: &str, position: &str, education: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "Lee",
        "email": format!("{}@example.com", first_name.to_lowercase()),
        "age": 29,
        "phone": "+44 20 7946 0000",
        "position": position,
        "experience": "2-5",
        "education": education,
        "skills": "SQL, Python",
        "motivation": "I enjoy turning messy data into clear answers."
    })
}

/// Value of the `trace-id` header, if present.
pub fn trace_id<B: MessageBody>(response: &ServiceResponse<B>) -> Option<String> {
    response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
