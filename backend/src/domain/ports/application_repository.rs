//! Driven port for the application store.
//!
//! The in-memory adapter is the only implementation today; a durable adapter
//! must honour the same contracts, in particular identifier monotonicity and
//! the listing order.

use async_trait::async_trait;

use crate::domain::{Application, ApplicationId, ValidatedApplication};

use super::define_port_error;

define_port_error! {
    /// Errors raised by application store adapters.
    pub enum ApplicationRepositoryError {
        /// The backing medium could not be reached or is in an unusable state.
        Unavailable { message: String } => "application store unavailable: {message}",
    }
}

/// Canonical home of application records.
///
/// Adapters trust their input: validation happens in the pipeline before any
/// call reaches the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Assign the next identifier and the current time, store the record and
    /// return a copy. Not idempotent: every call creates a new record.
    async fn create_application(
        &self,
        application: ValidatedApplication,
    ) -> Result<Application, ApplicationRepositoryError>;

    /// Look up a record by identifier.
    async fn get_application(
        &self,
        id: ApplicationId,
    ) -> Result<Option<Application>, ApplicationRepositoryError>;

    /// All current records, most recently submitted first. Records with equal
    /// timestamps are returned newest insertion first.
    async fn list_applications(&self) -> Result<Vec<Application>, ApplicationRepositoryError>;

    /// Remove a record. Returns whether a record was actually removed.
    async fn delete_application(&self, id: ApplicationId)
    -> Result<bool, ApplicationRepositoryError>;
}
