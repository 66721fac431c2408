//! Driven port for administrator user records.

use async_trait::async_trait;

use crate::domain::{LoginCredentials, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserRepositoryError {
        /// Another user already holds this username.
        DuplicateUsername { username: String } => "username already taken: {username}",
        /// The password could not be hashed for storage.
        Credential { message: String } => "credential could not be stored: {message}",
        /// The backing medium could not be reached or is in an unusable state.
        Unavailable { message: String } => "user store unavailable: {message}",
    }
}

/// Canonical home of user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user under the next user identifier. The password is
    /// hashed before it reaches storage; usernames must be unique.
    async fn create_user(&self, credentials: &LoginCredentials) -> Result<User, UserRepositoryError>;

    /// Look up a user by identifier.
    async fn get_user(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Look up a user by exact, case-sensitive username.
    async fn get_user_by_username(&self, username: &str)
    -> Result<Option<User>, UserRepositoryError>;
}
