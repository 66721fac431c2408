//! Success envelopes returned by the HTTP handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Application;

/// `Cache-Control` value for responses carrying applicant data.
pub const NO_STORE: (&str, &str) = ("Cache-Control", "no-store");

/// Body of a successful submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    #[schema(example = true)]
    pub success: bool,
    pub application: Application,
}

impl SubmitResponse {
    /// Successful envelope around the stored record.
    pub fn new(application: Application) -> Self {
        Self {
            success: true,
            application,
        }
    }
}

/// Acknowledgement carrying a short human-readable message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Application deleted")]
    pub message: String,
}

impl MessageResponse {
    /// Successful acknowledgement with `message`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Current administrator session.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionStatus {
    #[schema(example = true)]
    pub authenticated: bool,
    #[schema(example = "Admin")]
    pub username: String,
}
