//! Backend entry-point: loads configuration, seeds the store and serves the
//! REST API.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hiring_backend::inbound::http::health::HealthState;
use hiring_backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use hiring_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

fn config_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let mode = BuildMode::from_debug_assertions();
    let settings = AppSettings::load_from_args(std::env::args_os()).map_err(config_error)?;
    let session = session_settings_from_env(&DefaultEnv::new(), mode).map_err(config_error)?;
    let bind_addr = settings.bind_addr().map_err(config_error)?;
    let store = settings.store_backend().map_err(config_error)?;
    let administrator = settings.administrator(mode).map_err(config_error)?;
    if administrator.generated_password {
        warn!(
            username = administrator.credentials.username(),
            "HIRING_ADMIN_PASSWORD not set; generated one-off administrator password: {}",
            administrator.credentials.password()
        );
    }

    let config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
        administrator.credentials,
    )
    .with_store(store);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "hiring backend listening");
    server.await
}
