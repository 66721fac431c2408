//! Salted one-way password digests.
//!
//! Administrator passwords are never stored verbatim: the store hashes them
//! with Argon2id and a fresh random salt, and authentication verifies a
//! claimed password against the stored PHC string.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use thiserror::Error;

/// Errors raised while hashing or verifying a password.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHashError {
    /// The hashing parameters were rejected.
    #[error("invalid password hashing parameters: {message}")]
    Parameters { message: String },
    /// Hashing failed.
    #[error("password hashing failed: {message}")]
    Hashing { message: String },
    /// A stored digest could not be parsed.
    #[error("stored password digest is malformed: {message}")]
    MalformedDigest { message: String },
}

/// PHC-formatted Argon2id digest of a password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// PHC string, including algorithm, parameters and salt.
    #[must_use]
    pub fn as_phc(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

/// Argon2id hasher with fixed cost parameters.
///
/// # Examples
/// ```
/// use hiring_backend::domain::CredentialHasher;
///
/// let hasher = CredentialHasher::default();
/// let digest = hasher.hash("correct horse").expect("hash");
/// assert!(hasher.verify("correct horse", &digest).expect("verify"));
/// assert!(!hasher.verify("wrong horse", &digest).expect("verify"));
/// ```
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl CredentialHasher {
    /// Build a hasher from explicit memory (KiB), iteration and lane costs.
    pub fn with_costs(
        memory_kib: u32,
        iterations: u32,
        lanes: u32,
    ) -> Result<Self, PasswordHashError> {
        let params = Params::new(memory_kib, iterations, lanes, None).map_err(|err| {
            PasswordHashError::Parameters {
                message: err.to_string(),
            }
        })?;
        Ok(Self { params })
    }

    /// Cheapest parameters Argon2 accepts. Only for tests.
    #[cfg(any(test, feature = "test-support"))]
    #[must_use]
    pub fn low_cost() -> Self {
        Self {
            params: Params::new(Params::MIN_M_COST, Params::MIN_T_COST, 1, None)
                .unwrap_or_default(),
        }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash `password` with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| PasswordDigest(hash.to_string()))
            .map_err(|err| PasswordHashError::Hashing {
                message: err.to_string(),
            })
    }

    /// Check `password` against `digest`.
    ///
    /// Returns `Ok(false)` for a mismatch; errors are reserved for digests
    /// that cannot be interpreted at all.
    pub fn verify(
        &self,
        password: &str,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHashError> {
        let parsed =
            PasswordHash::new(digest.as_phc()).map_err(|err| PasswordHashError::MalformedDigest {
                message: err.to_string(),
            })?;
        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(PasswordHashError::Hashing {
                message: err.to_string(),
            }),
        }
    }
}

/// Checks a claimed password against a stored digest.
#[cfg_attr(test, mockall::automock)]
pub trait DigestVerifier: Send + Sync {
    /// `Ok(false)` on mismatch; errors only for unusable digests.
    fn verify_digest(
        &self,
        password: &str,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHashError>;
}

impl DigestVerifier for CredentialHasher {
    fn verify_digest(
        &self,
        password: &str,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHashError> {
        self.verify(password, digest)
    }
}
