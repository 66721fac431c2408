//! Application use-cases.
//!
//! Runs submissions through the validation pipeline, forwards accepted ones
//! to the store and maps store failures onto the domain error envelope.

use std::sync::Arc;

use mockable::Clock;
use serde_json::Value;
use tracing::{error, info};

use crate::domain::ports::{ApplicationRepository, ApplicationRepositoryError};
use crate::domain::validation::validate_application_input;
use crate::domain::{Application, ApplicationId, ApplicationStats, Error};

/// Message returned for unknown application identifiers.
pub const APPLICATION_NOT_FOUND: &str = "Application not found";

/// Application service over an [`ApplicationRepository`].
#[derive(Clone)]
pub struct ApplicationsService {
    repository: Arc<dyn ApplicationRepository>,
    clock: Arc<dyn Clock>,
}

impl ApplicationsService {
    /// Create a service. `clock` drives the `recent` window of
    /// [`Self::statistics`].
    pub fn new(repository: Arc<dyn ApplicationRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    fn map_repository_error(err: ApplicationRepositoryError) -> Error {
        error!(error = %err, "application store failure");
        match err {
            ApplicationRepositoryError::Unavailable { message } => {
                Error::internal(format!("application store unavailable: {message}"))
            }
        }
    }

    /// Validate `raw` and store it.
    ///
    /// Validation failures become `invalid_request` errors listing every
    /// violated field under `details.errors`.
    pub async fn submit(&self, raw: &Value) -> Result<Application, Error> {
        let validated = validate_application_input(raw).map_err(|err| {
            info!(fields = %err, "application rejected");
            Error::from(err)
        })?;
        let application = self
            .repository
            .create_application(validated)
            .await
            .map_err(Self::map_repository_error)?;
        info!(
            application_id = %application.id(),
            position = application.position(),
            "application submitted"
        );
        Ok(application)
    }

    /// All applications, newest first.
    pub async fn list(&self) -> Result<Vec<Application>, Error> {
        self.repository
            .list_applications()
            .await
            .map_err(Self::map_repository_error)
    }

    /// Fetch one application.
    pub async fn fetch(&self, id: ApplicationId) -> Result<Application, Error> {
        self.repository
            .get_application(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(APPLICATION_NOT_FOUND))
    }

    /// Delete one application; unknown identifiers are `not_found`.
    pub async fn delete(&self, id: ApplicationId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete_application(id)
            .await
            .map_err(Self::map_repository_error)?;
        if removed {
            info!(application_id = %id, "application deleted");
            Ok(())
        } else {
            Err(Error::not_found(APPLICATION_NOT_FOUND))
        }
    }

    /// Dashboard aggregate as of the service clock's current time.
    pub async fn statistics(&self) -> Result<ApplicationStats, Error> {
        let applications = self.list().await?;
        Ok(ApplicationStats::compute(&applications, self.clock.utc()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockApplicationRepository;
    use crate::outbound::memory::MemoryStore;
    use crate::domain::CredentialHasher;
    use mockable::DefaultClock;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn payload() -> Value {
        json!({
            "firstName": "Ana",
            "lastName": "Lee",
            "email": "ana@x.com",
            "age": 17,
            "position": "Data Analyst",
            "experience": "0-1",
            "education": "Bachelor's Degree",
            "motivation": "I want to help advance research."
        })
    }

    fn memory_service() -> ApplicationsService {
        let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
        let store = MemoryStore::new(clock.clone(), CredentialHasher::low_cost());
        ApplicationsService::new(Arc::new(store), clock)
    }

    fn unavailable_service() -> ApplicationsService {
        let mut repo = MockApplicationRepository::new();
        repo.expect_create_application()
            .returning(|_| Err(ApplicationRepositoryError::unavailable("lock poisoned")));
        repo.expect_list_applications()
            .returning(|| Err(ApplicationRepositoryError::unavailable("lock poisoned")));
        repo.expect_get_application()
            .returning(|_| Err(ApplicationRepositoryError::unavailable("lock poisoned")));
        repo.expect_delete_application()
            .returning(|_| Err(ApplicationRepositoryError::unavailable("lock poisoned")));
        ApplicationsService::new(Arc::new(repo), Arc::new(DefaultClock))
    }

    #[rstest]
    #[tokio::test]
    async fn submit_assigns_first_identifier(payload: Value) {
        let service = memory_service();
        let created = service.submit(&payload).await.expect("submit");
        assert_eq!(created.id(), ApplicationId::new(1));
        assert_eq!(created.phone(), None);
        assert_eq!(created.skills(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn submit_rejects_invalid_payload_without_touching_store(mut payload: Value) {
        payload["age"] = json!(10);
        let mut repo = MockApplicationRepository::new();
        repo.expect_create_application().never();
        let service = ApplicationsService::new(Arc::new(repo), Arc::new(DefaultClock));

        let err = service.submit(&payload).await.expect_err("must fail");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details["errors"].as_array().map(Vec::len), Some(1));
        assert_eq!(details["errors"][0]["field"], json!("age"));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_then_fetch_reports_not_found(payload: Value) {
        let service = memory_service();
        let first = service.submit(&payload).await.expect("first");
        let second = service.submit(&payload).await.expect("second");

        service.delete(first.id()).await.expect("delete");

        let err = service.fetch(first.id()).await.expect_err("gone");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), APPLICATION_NOT_FOUND);
        let remaining = service.list().await.expect("list");
        assert_eq!(remaining, vec![second]);

        let again = service.delete(first.id()).await.expect_err("second delete");
        assert_eq!(again.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn statistics_summarise_store(payload: Value) {
        let service = memory_service();
        service.submit(&payload).await.expect("submit");

        let stats = service.statistics().await.expect("stats");

        assert_eq!(stats.total, 1);
        assert_eq!(stats.recent, 1);
        assert_eq!(stats.top_position.as_deref(), Some("Data Analyst"));
    }

    #[rstest]
    #[tokio::test]
    async fn store_failures_map_to_internal_errors(payload: Value) {
        let service = unavailable_service();
        let id = ApplicationId::new(1);

        let errors = [
            service.submit(&payload).await.expect_err("submit"),
            service.list().await.expect_err("list"),
            service.fetch(id).await.expect_err("fetch"),
            service.delete(id).await.expect_err("delete"),
            service.statistics().await.expect_err("statistics"),
        ];

        for err in errors {
            assert_eq!(err.code(), ErrorCode::InternalError);
            assert!(err.message().contains("lock poisoned"));
        }
    }
}
