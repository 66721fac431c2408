//! Validation pipeline for untrusted input.
//!
//! Pure functions that turn a raw JSON payload into a validated value or a
//! [`ValidationError`] listing every violated field. Validation is batch, not
//! fail-fast: all fields are checked before returning.
//!
//! Fields the caller has no business setting (`id`, `submittedAt`) are
//! ignored; the store assigns them.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use utoipa::ToSchema;

use super::{Error, LoginCredentials, LoginValidationError, ValidatedApplication};

/// Youngest accepted applicant age, inclusive.
pub const MIN_AGE: i64 = 16;
/// Oldest accepted applicant age, inclusive.
pub const MAX_AGE: i64 = 100;
/// Minimum motivation length in characters, ignoring surrounding whitespace.
pub const MIN_MOTIVATION_CHARS: usize = 10;

/// Machine-readable reason attached to a [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    /// The field is missing, null or blank.
    Required,
    /// The field has the wrong JSON type.
    InvalidType,
    /// The field is not a syntactically valid email address.
    InvalidEmail,
    /// The value is below the allowed minimum.
    TooSmall,
    /// The value is above the allowed maximum.
    TooBig,
    /// The text is shorter than the allowed minimum.
    TooShort,
}

/// One violated constraint tied to one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "age")]
    field: String,
    #[schema(example = "too_small")]
    code: FieldErrorCode,
    #[schema(example = "Must be at least 16")]
    message: String,
}

impl FieldError {
    fn new(field: &str, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.to_owned(),
            code,
            message: message.into(),
        }
    }

    /// Name of the offending input field, as spelled in the payload.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Machine-readable reason.
    #[must_use]
    pub fn code(&self) -> FieldErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Caller-supplied data failed one or more declared constraints.
///
/// Always non-empty. Distinct from store and transport failures so adapters
/// can map it to a client error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Every field error, in payload declaration order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Names of the violated fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(FieldError::field)
    }

    /// Whether `field` is among the violations.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields().any(|name| name == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "validation failed for: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(value: ValidationError) -> Self {
        Error::invalid_request("Validation error").with_details(json!({ "errors": value.errors }))
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Leading dots and consecutive dots are rejected separately; the
        // regex crate has no lookaround.
        let pattern = r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn is_valid_email(candidate: &str) -> bool {
    !candidate.starts_with('.') && !candidate.contains("..") && email_regex().is_match(candidate)
}

/// Collects field errors while reading values out of a JSON object.
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            errors: Vec::new(),
        }
    }

    fn reject(&mut self, field: &str, code: FieldErrorCode, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, code, message));
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    /// Required string that must not be blank once trimmed.
    fn required_text(&mut self, field: &str, required: &str) -> Option<String> {
        match self.present(field) {
            None => {
                self.reject(field, FieldErrorCode::Required, required);
                None
            }
            Some(Value::String(text)) if text.trim().is_empty() => {
                self.reject(field, FieldErrorCode::Required, required);
                None
            }
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                self.reject(
                    field,
                    FieldErrorCode::InvalidType,
                    format!("{field} must be a string"),
                );
                None
            }
        }
    }

    /// Optional string passed through verbatim; `None` when absent or null.
    fn optional_text(&mut self, field: &str) -> Option<String> {
        match self.present(field) {
            None => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                self.reject(
                    field,
                    FieldErrorCode::InvalidType,
                    format!("{field} must be a string"),
                );
                None
            }
        }
    }

    fn email(&mut self, field: &str) -> Option<String> {
        const MESSAGE: &str = "Valid email is required";
        let text = self.required_text(field, MESSAGE)?;
        if is_valid_email(text.trim()) {
            Some(text.trim().to_owned())
        } else {
            self.reject(field, FieldErrorCode::InvalidEmail, MESSAGE);
            None
        }
    }

    fn age(&mut self, field: &str) -> Option<u8> {
        let number = match self.present(field) {
            None => {
                self.reject(field, FieldErrorCode::Required, "Age is required");
                return None;
            }
            Some(Value::Number(number)) => number,
            Some(_) => {
                self.reject(field, FieldErrorCode::InvalidType, "Age must be a number");
                return None;
            }
        };

        let Some(age) = number.as_i64() else {
            if number.is_u64() {
                self.reject(
                    field,
                    FieldErrorCode::TooBig,
                    format!("Must be at most {MAX_AGE}"),
                );
            } else {
                self.reject(
                    field,
                    FieldErrorCode::InvalidType,
                    "Age must be a whole number",
                );
            }
            return None;
        };

        if age < MIN_AGE {
            self.reject(
                field,
                FieldErrorCode::TooSmall,
                format!("Must be at least {MIN_AGE}"),
            );
            return None;
        }
        if age > MAX_AGE {
            self.reject(
                field,
                FieldErrorCode::TooBig,
                format!("Must be at most {MAX_AGE}"),
            );
            return None;
        }
        u8::try_from(age).ok()
    }

    fn motivation(&mut self, field: &str) -> Option<String> {
        let message = format!("Please provide at least {MIN_MOTIVATION_CHARS} characters");
        let text = self.required_text(field, &message)?;
        if text.trim().chars().count() < MIN_MOTIVATION_CHARS {
            self.reject(field, FieldErrorCode::TooShort, message);
            return None;
        }
        Some(text)
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationError {
                errors: self.errors,
            }),
        }
    }
}

fn expect_object(raw: &Value) -> Result<&Map<String, Value>, ValidationError> {
    raw.as_object().ok_or_else(|| ValidationError {
        errors: vec![FieldError::new(
            "body",
            FieldErrorCode::InvalidType,
            "Request body must be a JSON object",
        )],
    })
}

/// Validate an application submission.
///
/// # Examples
/// ```
/// use hiring_backend::domain::validation::validate_application_input;
/// use serde_json::json;
///
/// let err = validate_application_input(&json!({ "age": 15 })).unwrap_err();
/// assert!(err.has_field("age"));
/// assert!(err.has_field("motivation"));
/// ```
pub fn validate_application_input(raw: &Value) -> Result<ValidatedApplication, ValidationError> {
    let object = expect_object(raw)?;
    let mut reader = FieldReader::new(object);

    let first_name = reader.required_text("firstName", "First name is required");
    let last_name = reader.required_text("lastName", "Last name is required");
    let email = reader.email("email");
    let age = reader.age("age");
    let phone = reader.optional_text("phone");
    let position = reader.required_text("position", "Position is required");
    let experience = reader.required_text("experience", "Experience level is required");
    let education = reader.required_text("education", "Education level is required");
    let skills = reader.optional_text("skills");
    let motivation = reader.motivation("motivation");

    let validated = (|| {
        Some(ValidatedApplication {
            first_name: first_name?,
            last_name: last_name?,
            email: email?,
            age: age?,
            phone,
            position: position?,
            experience: experience?,
            education: education?,
            skills,
            motivation: motivation?,
        })
    })();
    reader.finish(validated)
}

/// Validate an administrator login attempt.
///
/// # Examples
/// ```
/// use hiring_backend::domain::validation::validate_login_input;
/// use serde_json::json;
///
/// let err = validate_login_input(&json!({ "username": "", "password": "" })).unwrap_err();
/// assert_eq!(err.errors().len(), 2);
/// ```
pub fn validate_login_input(raw: &Value) -> Result<LoginCredentials, ValidationError> {
    let object = expect_object(raw)?;
    let mut reader = FieldReader::new(object);

    let username = reader.required_text("username", "Username is required");
    let password = match reader.present("password") {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        Some(Value::String(_)) | None => {
            reader.reject("password", FieldErrorCode::Required, "Password is required");
            None
        }
        Some(_) => {
            reader.reject(
                "password",
                FieldErrorCode::InvalidType,
                "password must be a string",
            );
            None
        }
    };

    let credentials = match (username, password) {
        (Some(username), Some(password)) => {
            match LoginCredentials::try_from_parts(&username, &password) {
                Ok(credentials) => Some(credentials),
                Err(err) => {
                    let field = match err {
                        LoginValidationError::EmptyUsername => "username",
                        LoginValidationError::EmptyPassword => "password",
                    };
                    reader.reject(field, FieldErrorCode::Required, err.to_string());
                    None
                }
            }
        }
        _ => None,
    };
    reader.finish(credentials)
}

#[cfg(test)]
mod tests;
