//! Builders for the HTTP state from the configured store backend.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use hiring_backend::domain::{ApplicationsService, RepositoryLoginService};
use hiring_backend::inbound::http::state::HttpState;
use hiring_backend::outbound::memory::MemoryStore;
use hiring_backend::settings::StoreBackend;

use super::ServerConfig;

/// Build handler state, seeding the administrator account.
///
/// # Errors
/// Returns [`std::io::Error`] when the administrator cannot be stored.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match config.store {
        StoreBackend::Memory => {
            let store = MemoryStore::with_administrator(
                clock.clone(),
                config.hasher.clone(),
                &config.administrator,
            )
            .map_err(|err| std::io::Error::other(format!("seeding administrator failed: {err}")))?;
            let store = Arc::new(store);
            info!(
                username = config.administrator.username(),
                "in-memory store ready with administrator"
            );

            let applications = Arc::new(ApplicationsService::new(store.clone(), clock));
            let login = RepositoryLoginService::new(store.clone(), config.hasher.clone())
                .map_err(|err| std::io::Error::other(format!("login service setup failed: {err}")))?;
            let login = Arc::new(login);
            Ok(web::Data::new(HttpState::new(applications, login, store)))
        }
    }
}
