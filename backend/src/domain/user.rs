//! Administrator user records.

use std::fmt;

use super::PasswordDigest;

/// Store-assigned user identifier, drawn from its own monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(u64);

impl UserId {
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Administrator credential record.
///
/// ## Invariants
/// - `username` is unique across all users (case-sensitive).
/// - `password` is a salted digest; the plaintext is never retained.
///
/// Deliberately not `Serialize`: the digest must not leave the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    password: PasswordDigest,
}

impl User {
    /// Build a user from store-assigned parts.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>, password: PasswordDigest) -> Self {
        Self {
            id,
            username: username.into(),
            password,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Stored password digest.
    #[must_use]
    pub fn password(&self) -> &PasswordDigest {
        &self.password
    }
}
