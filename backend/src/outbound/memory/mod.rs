//! In-memory Application Store.
//!
//! Both collections and both identifier counters live behind one mutex, so
//! concurrent creates can never observe or assign the same identifier. State
//! is scoped to the process: a restart starts from empty collections and
//! counters at 1.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{
    ApplicationRepository, ApplicationRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Application, ApplicationId, CredentialHasher, LoginCredentials, User, UserId,
    ValidatedApplication,
};

#[derive(Debug)]
struct StoreState {
    applications: HashMap<ApplicationId, Application>,
    users: HashMap<UserId, User>,
    next_application_id: u64,
    next_user_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            applications: HashMap::new(),
            users: HashMap::new(),
            next_application_id: 1,
            next_user_id: 1,
        }
    }
}

/// Process-lifetime store implementing both repository ports.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use hiring_backend::domain::CredentialHasher;
/// use hiring_backend::outbound::memory::MemoryStore;
/// use mockable::DefaultClock;
///
/// let store = MemoryStore::new(Arc::new(DefaultClock), CredentialHasher::default());
/// # let _ = store;
/// ```
pub struct MemoryStore {
    state: Mutex<StoreState>,
    clock: Arc<dyn Clock>,
    hasher: CredentialHasher,
}

impl MemoryStore {
    /// Create an empty store. `clock` stamps `submittedAt`; `hasher` digests
    /// user passwords.
    pub fn new(clock: Arc<dyn Clock>, hasher: CredentialHasher) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            clock,
            hasher,
        }
    }

    /// Create a store seeded with one administrator, who receives user id 1.
    ///
    /// # Errors
    /// Returns [`UserRepositoryError::Credential`] when the password cannot
    /// be hashed.
    pub fn with_administrator(
        clock: Arc<dyn Clock>,
        hasher: CredentialHasher,
        administrator: &LoginCredentials,
    ) -> Result<Self, UserRepositoryError> {
        let store = Self::new(clock, hasher);
        store.insert_user(administrator)?;
        Ok(store)
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, String> {
        self.state
            .lock()
            .map_err(|_| "store lock poisoned".to_owned())
    }

    fn insert_user(&self, credentials: &LoginCredentials) -> Result<User, UserRepositoryError> {
        // Hash outside the lock; Argon2 is deliberately slow.
        let digest = self
            .hasher
            .hash(credentials.password())
            .map_err(|err| UserRepositoryError::credential(err.to_string()))?;

        let mut state = self.lock().map_err(UserRepositoryError::unavailable)?;
        if state
            .users
            .values()
            .any(|user| user.username() == credentials.username())
        {
            return Err(UserRepositoryError::duplicate_username(
                credentials.username(),
            ));
        }
        let id = UserId::new(state.next_user_id);
        state.next_user_id += 1;
        let user = User::new(id, credentials.username(), digest);
        state.users.insert(id, user.clone());
        debug!(user_id = %id, "user stored");
        Ok(user)
    }
}

#[async_trait]
impl ApplicationRepository for MemoryStore {
    async fn create_application(
        &self,
        application: ValidatedApplication,
    ) -> Result<Application, ApplicationRepositoryError> {
        let mut state = self.lock().map_err(ApplicationRepositoryError::unavailable)?;
        let id = ApplicationId::new(state.next_application_id);
        state.next_application_id += 1;
        let record = Application::from_validated(id, self.clock.utc(), application);
        state.applications.insert(id, record.clone());
        debug!(application_id = %id, "application stored");
        Ok(record)
    }

    async fn get_application(
        &self,
        id: ApplicationId,
    ) -> Result<Option<Application>, ApplicationRepositoryError> {
        let state = self.lock().map_err(ApplicationRepositoryError::unavailable)?;
        Ok(state.applications.get(&id).cloned())
    }

    async fn list_applications(&self) -> Result<Vec<Application>, ApplicationRepositoryError> {
        let state = self.lock().map_err(ApplicationRepositoryError::unavailable)?;
        let mut records: Vec<Application> = state.applications.values().cloned().collect();
        records.sort_by(|a, b| {
            b.submitted_at()
                .cmp(&a.submitted_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(records)
    }

    async fn delete_application(
        &self,
        id: ApplicationId,
    ) -> Result<bool, ApplicationRepositoryError> {
        let mut state = self.lock().map_err(ApplicationRepositoryError::unavailable)?;
        Ok(state.applications.remove(&id).is_some())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<User, UserRepositoryError> {
        self.insert_user(credentials)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let state = self.lock().map_err(UserRepositoryError::unavailable)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        let state = self.lock().map_err(UserRepositoryError::unavailable)?;
        Ok(state
            .users
            .values()
            .find(|user| user.username() == username)
            .cloned())
    }
}
