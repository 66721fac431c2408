//! Administrator authentication.
//!
//! [`LoginCredentials`] is the validated shape of a login attempt;
//! [`RepositoryLoginService`] checks it against the user store.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};
use zeroize::Zeroizing;

use super::ports::{LoginService, UserRepository, UserRepositoryError};
use super::{CredentialHasher, DigestVerifier, Error, PasswordDigest, PasswordHashError, UserId};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const DECOY_PASSWORD: &str = "unknown-user-decoy";

/// Domain error returned when login values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was empty.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "Username is required"),
            Self::EmptyPassword => write!(f, "Password is required"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is kept verbatim and is not blank once trimmed.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use hiring_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("Admin", "s3cret").unwrap();
/// assert_eq!(creds.username(), "Admin");
/// assert!(LoginCredentials::try_from_parts("   ", "s3cret").is_err());
/// assert_eq!(creds.password(), "s3cret");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        if username.trim().is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username used for the exact-match lookup.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password supplied by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"..")
            .finish()
    }
}

/// [`LoginService`] backed by a [`UserRepository`] and Argon2 digests.
///
/// Unknown usernames and wrong passwords produce the same error so callers
/// cannot tell which half of the pair was wrong. Unknown usernames are
/// verified against a decoy digest so both paths cost one Argon2 run.
#[derive(Clone)]
pub struct RepositoryLoginService {
    users: Arc<dyn UserRepository>,
    verifier: Arc<dyn DigestVerifier>,
    decoy: PasswordDigest,
}

impl RepositoryLoginService {
    /// Create a login service over `users`.
    ///
    /// # Errors
    /// Returns [`PasswordHashError`] when the decoy digest cannot be hashed.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: CredentialHasher,
    ) -> Result<Self, PasswordHashError> {
        let decoy = hasher.hash(DECOY_PASSWORD)?;
        Ok(Self::with_verifier(users, Arc::new(hasher), decoy))
    }

    fn with_verifier(
        users: Arc<dyn UserRepository>,
        verifier: Arc<dyn DigestVerifier>,
        decoy: PasswordDigest,
    ) -> Self {
        Self {
            users,
            verifier,
            decoy,
        }
    }
}

fn map_user_lookup_error(err: UserRepositoryError) -> Error {
    error!(error = %err, "user lookup failed during login");
    Error::internal(format!("user lookup failed: {err}"))
}

#[async_trait]
impl LoginService for RepositoryLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let user = self
            .users
            .get_user_by_username(credentials.username())
            .await
            .map_err(map_user_lookup_error)?;

        let Some(user) = user else {
            if let Err(err) = self
                .verifier
                .verify_digest(credentials.password(), &self.decoy)
            {
                error!(error = %err, "decoy digest unusable");
            }
            info!(username = credentials.username(), "login rejected");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let matches = self
            .verifier
            .verify_digest(credentials.password(), user.password())
            .map_err(|err| {
                error!(user_id = %user.id(), error = %err, "stored digest unusable");
                Error::internal(format!("password verification failed: {err}"))
            })?;

        if matches {
            info!(user_id = %user.id(), "administrator logged in");
            Ok(user.id())
        } else {
            info!(username = credentials.username(), "login rejected");
            Err(Error::unauthorized(INVALID_CREDENTIALS))
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for credential parsing and verification.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::password::MockDigestVerifier;
    use crate::domain::ports::{MockUserRepository, UserRepository};
    use crate::domain::User;
    use crate::outbound::memory::MemoryStore;
    use mockable::DefaultClock;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyUsername)]
    #[case("   ", "pw", LoginValidationError::EmptyUsername)]
    #[case("user", "", LoginValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn debug_hides_password() {
        let creds = LoginCredentials::try_from_parts("Admin", "hunter2").expect("valid");
        assert!(!format!("{creds:?}").contains("hunter2"));
    }

    async fn service_with_admin() -> RepositoryLoginService {
        let hasher = CredentialHasher::low_cost();
        let admin = LoginCredentials::try_from_parts("Admin", "Admin123!").expect("valid");
        let store = MemoryStore::with_administrator(Arc::new(DefaultClock), hasher.clone(), &admin)
            .expect("seed store");
        RepositoryLoginService::new(Arc::new(store), hasher).expect("login service")
    }

    #[rstest]
    #[case("Admin", "Admin123!", true)]
    #[case("Admin", "admin123!", false)]
    #[case("admin", "Admin123!", false)]
    #[case("Nobody", "Admin123!", false)]
    #[case(" Admin ", "Admin123!", false)]
    #[case("Admin\n", "Admin123!", false)]
    #[tokio::test]
    async fn authenticates_only_the_exact_pair(
        #[case] username: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let service = service_with_admin().await;
        let creds = LoginCredentials::try_from_parts(username, password).expect("shape");
        match (should_succeed, service.authenticate(&creds).await) {
            (true, Ok(id)) => assert_eq!(id, UserId::new(1)),
            (false, Err(err)) => {
                assert_eq!(err.code(), ErrorCode::Unauthorized);
                assert_eq!(err.message(), INVALID_CREDENTIALS);
            }
            (true, Err(err)) => panic!("expected success, got {err:?}"),
            (false, Ok(id)) => panic!("expected failure, got {id}"),
        }
    }

    #[tokio::test]
    async fn authenticates_users_created_after_seeding() {
        let hasher = CredentialHasher::low_cost();
        let store = Arc::new(MemoryStore::new(Arc::new(DefaultClock), hasher.clone()));
        let creds = LoginCredentials::try_from_parts("reviewer", "pa55word").expect("valid");
        let created = store.create_user(&creds).await.expect("create user");

        let service = RepositoryLoginService::new(store, hasher).expect("login service");
        let id = service.authenticate(&creds).await.expect("login");
        assert_eq!(id, created.id());
    }

    #[tokio::test]
    async fn unknown_users_still_run_one_verification() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_user_by_username()
            .times(1)
            .returning(|_| Ok(None));
        let mut verifier = MockDigestVerifier::new();
        verifier
            .expect_verify_digest()
            .times(1)
            .returning(|_, _| Ok(true));
        let decoy = CredentialHasher::low_cost().hash("decoy").expect("hash");
        let service =
            RepositoryLoginService::with_verifier(Arc::new(users), Arc::new(verifier), decoy);

        let creds = LoginCredentials::try_from_parts("ghost", "decoy").expect("shape");
        let err = service.authenticate(&creds).await.expect_err("unknown user");

        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn known_users_verify_against_their_own_digest() {
        let hasher = CredentialHasher::low_cost();
        let stored = hasher.hash("Admin123!").expect("hash");
        let expected = stored.clone();
        let mut users = MockUserRepository::new();
        users
            .expect_get_user_by_username()
            .times(1)
            .returning(move |name| Ok(Some(User::new(UserId::new(7), name, stored.clone()))));
        let mut verifier = MockDigestVerifier::new();
        verifier
            .expect_verify_digest()
            .times(1)
            .withf(move |_, digest| *digest == expected)
            .returning(|_, _| Ok(false));
        let decoy = hasher.hash("decoy").expect("hash");
        let service =
            RepositoryLoginService::with_verifier(Arc::new(users), Arc::new(verifier), decoy);

        let creds = LoginCredentials::try_from_parts("Admin", "nope").expect("shape");
        let err = service.authenticate(&creds).await.expect_err("wrong password");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }
}
