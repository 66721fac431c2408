//! OpenAPI schemas for request bodies.
//!
//! Handlers accept raw JSON and run it through the validation pipeline, so
//! these types never deserialise anything. They only describe the expected
//! shape to Swagger UI.

use utoipa::ToSchema;

/// Application form as submitted by applicants.
#[derive(ToSchema)]
#[schema(as = ApplicationRequest, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ApplicationRequestSchema {
    #[schema(example = "Ana")]
    first_name: String,
    #[schema(example = "Lee")]
    last_name: String,
    #[schema(example = "ana@example.com")]
    email: String,
    /// Whole years, 16 to 100 inclusive.
    #[schema(minimum = 16, maximum = 100, example = 27)]
    age: u8,
    phone: Option<String>,
    #[schema(example = "Data Analyst")]
    position: String,
    /// One of `0-1`, `2-5`, `6-10`, `10+`.
    #[schema(example = "2-5")]
    experience: String,
    /// One of `High School`, `Associate Degree`, `Bachelor's Degree`,
    /// `Master's Degree`, `PhD`.
    #[schema(example = "Bachelor's Degree")]
    education: String,
    skills: Option<String>,
    /// At least 10 characters.
    #[schema(min_length = 10, example = "I want to help advance research.")]
    motivation: String,
}

/// Administrator login form.
#[derive(ToSchema)]
#[schema(as = LoginRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LoginRequestSchema {
    #[schema(example = "Admin")]
    username: String,
    #[schema(format = Password)]
    password: String,
}
