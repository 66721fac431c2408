//! Employment application records.
//!
//! A [`ValidatedApplication`] can only be produced by the validation pipeline
//! (see [`crate::domain::validation`]); the store turns it into an
//! [`Application`] by assigning the identifier and submission time.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned application identifier.
///
/// Identifiers are assigned from a monotonic counter starting at 1 and are
/// never reused, even after the record they named is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(u64);

impl ApplicationId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApplicationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Application input that has passed every field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedApplication {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) age: u8,
    pub(crate) phone: Option<String>,
    pub(crate) position: String,
    pub(crate) experience: String,
    pub(crate) education: String,
    pub(crate) skills: Option<String>,
    pub(crate) motivation: String,
}

impl ValidatedApplication {
    /// Applicant email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Applicant age in years.
    #[must_use]
    pub fn age(&self) -> u8 {
        self.age
    }

    /// Position of interest.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Phone number as supplied, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Free-text skills as supplied, if any.
    #[must_use]
    pub fn skills(&self) -> Option<&str> {
        self.skills.as_deref()
    }
}

/// Persisted employment application.
///
/// ## Invariants
/// - `id` and `submitted_at` are assigned by the store and never change.
/// - `phone` and `skills` are `None` when the applicant supplied nothing or
///   only whitespace; they serialise as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[schema(value_type = u64, example = 1)]
    id: ApplicationId,
    #[schema(example = "Ana")]
    first_name: String,
    #[schema(example = "Lee")]
    last_name: String,
    #[schema(example = "ana@example.com")]
    email: String,
    #[schema(example = 27)]
    age: u8,
    phone: Option<String>,
    #[schema(example = "Data Analyst")]
    position: String,
    #[schema(example = "2-5")]
    experience: String,
    #[schema(example = "Bachelor's Degree")]
    education: String,
    skills: Option<String>,
    motivation: String,
    submitted_at: DateTime<Utc>,
}

impl Application {
    /// Materialise a validated submission under a store-assigned identity.
    #[must_use]
    pub fn from_validated(
        id: ApplicationId,
        submitted_at: DateTime<Utc>,
        validated: ValidatedApplication,
    ) -> Self {
        let ValidatedApplication {
            first_name,
            last_name,
            email,
            age,
            phone,
            position,
            experience,
            education,
            skills,
            motivation,
        } = validated;
        Self {
            id,
            first_name,
            last_name,
            email,
            age,
            phone: normalise_optional(phone),
            position,
            experience,
            education,
            skills: normalise_optional(skills),
            motivation,
            submitted_at,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> ApplicationId {
        self.id
    }

    /// Applicant first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Applicant last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Applicant email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Applicant age in years.
    #[must_use]
    pub fn age(&self) -> u8 {
        self.age
    }

    /// Phone number, if one was supplied.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Position of interest.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Experience bucket label, e.g. `2-5`.
    #[must_use]
    pub fn experience(&self) -> &str {
        &self.experience
    }

    /// Highest education level label.
    #[must_use]
    pub fn education(&self) -> &str {
        &self.education
    }

    /// Free-text skills, if supplied.
    #[must_use]
    pub fn skills(&self) -> Option<&str> {
        self.skills.as_deref()
    }

    /// Applicant motivation statement.
    #[must_use]
    pub fn motivation(&self) -> &str {
        &self.motivation
    }

    /// Store-side creation time.
    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

fn normalise_optional(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}
