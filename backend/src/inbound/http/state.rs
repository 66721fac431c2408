//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only ever see domain
//! services and ports, which keeps them testable without a real store.

use std::sync::Arc;

use crate::domain::ApplicationsService;
use crate::domain::ports::{LoginService, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Submission, listing, deletion and statistics use-cases.
    pub applications: Arc<ApplicationsService>,
    /// Credential check for the login endpoint.
    pub login: Arc<dyn LoginService>,
    /// User lookups used to confirm a session still names a real user.
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Bundle the services handlers depend on.
    pub fn new(
        applications: Arc<ApplicationsService>,
        login: Arc<dyn LoginService>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            applications,
            login,
            users,
        }
    }
}
