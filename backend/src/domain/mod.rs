//! Domain primitives, aggregates and use-cases.
//!
//! Purpose: define strongly typed entities shared by the HTTP adapter and the
//! store, plus the services that orchestrate them. Nothing here depends on
//! actix; adapters talk to the domain through [`ports`].
//!
//! Public surface:
//! - Application / ApplicationId / ValidatedApplication — submission records.
//! - User / UserId / PasswordDigest / CredentialHasher — administrator records.
//! - LoginCredentials / RepositoryLoginService — authentication.
//! - EducationLevel / ApplicationStats — dashboard aggregates.
//! - ApplicationsService — submission, listing and deletion use-cases.
//! - Error / ErrorCode / TraceId — request-scoped error envelope.

pub mod application;
pub mod applications_service;
pub mod auth;
pub mod error;
pub mod password;
pub mod ports;
pub mod statistics;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::application::{Application, ApplicationId, ValidatedApplication};
pub use self::applications_service::{APPLICATION_NOT_FOUND, ApplicationsService};
pub use self::auth::{LoginCredentials, LoginValidationError, RepositoryLoginService};
pub use self::error::{Error, ErrorCode};
pub use self::password::{CredentialHasher, DigestVerifier, PasswordDigest, PasswordHashError};
pub use self::statistics::{ApplicationStats, EducationLevel};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId};
pub use self::validation::{FieldError, FieldErrorCode, ValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use hiring_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::unauthorized("Authentication required"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
