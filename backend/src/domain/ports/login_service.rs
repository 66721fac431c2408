//! Driving port for administrator authentication.
//!
//! Inbound adapters call it to check credentials without knowing how users
//! are stored, which keeps handler tests free of persistence wiring.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    ///
    /// A wrong pair yields an `unauthorized` error that does not reveal
    /// which half was wrong.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}
