//! Process configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `HIRING_*` environment variables or a config
//! file. The port defaults at load time; the remaining fields are optional
//! and accessors apply defaults and validate.

use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::LoginCredentials;
use crate::inbound::http::session_config::BuildMode;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ADMIN_USERNAME: &str = "Admin";
const DEFAULT_STORE: &str = "memory";

/// Errors raised while interpreting settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// CLI, environment or file sources could not be merged.
    #[error("failed to load configuration: {message}")]
    Load { message: String },
    /// Host and port do not resolve to a socket address.
    #[error("cannot resolve bind address {value}: {message}")]
    BindAddress { value: String, message: String },
    /// The store name is not a known backend.
    #[error("unsupported store backend '{value}'; expected memory")]
    UnknownStore { value: String },
    /// Release builds need an explicit administrator password.
    #[error("HIRING_ADMIN_PASSWORD must be set in release builds")]
    MissingAdminPassword,
    /// The administrator username or password is blank.
    #[error("invalid administrator credentials: {message}")]
    Administrator { message: String },
}

/// Backing store for application and user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-lifetime maps; everything is lost on restart.
    Memory,
}

/// Administrator account created at startup.
#[derive(Debug)]
pub struct AdministratorSeed {
    pub credentials: LoginCredentials,
    /// Whether the password was generated because none was configured.
    pub generated_password: bool,
}

/// Server settings.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HIRING")]
pub struct AppSettings {
    /// Interface to bind, `0.0.0.0` when unset.
    pub host: Option<String>,
    /// TCP port.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Seeded administrator username, `Admin` when unset.
    pub admin_username: Option<String>,
    /// Seeded administrator password.
    pub admin_password: Option<String>,
    /// Store backend name, `memory` when unset.
    pub store: Option<String>,
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &self.admin_password.as_ref().map(|_| ".."))
            .field("store", &self.store)
            .finish()
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            admin_username: None,
            admin_password: None,
            store: None,
        }
    }
}

impl AppSettings {
    /// Load settings from `args`, the environment and any config file.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::load_from_iter(args).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Configured host, falling back to `0.0.0.0`.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Resolve host and port to a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = format!("{}:{}", self.host(), self.port);
        let bind_error = |message: String| SettingsError::BindAddress {
            value: value.clone(),
            message,
        };
        (self.host(), self.port)
            .to_socket_addrs()
            .map_err(|err| bind_error(err.to_string()))?
            .next()
            .ok_or_else(|| bind_error("no addresses".to_owned()))
    }

    /// Selected store backend.
    pub fn store_backend(&self) -> Result<StoreBackend, SettingsError> {
        let value = self.store.as_deref().unwrap_or(DEFAULT_STORE);
        if value.trim().eq_ignore_ascii_case("memory") {
            Ok(StoreBackend::Memory)
        } else {
            Err(SettingsError::UnknownStore {
                value: value.to_owned(),
            })
        }
    }

    /// Administrator account to seed.
    ///
    /// Release builds require a configured password. Debug builds generate a
    /// random one-off password when none is set.
    pub fn administrator(&self, mode: BuildMode) -> Result<AdministratorSeed, SettingsError> {
        let username = self
            .admin_username
            .as_deref()
            .unwrap_or(DEFAULT_ADMIN_USERNAME);
        let (password, generated_password) = match self.admin_password.as_deref() {
            Some(password) => (password.to_owned(), false),
            None if mode.is_debug() => (Uuid::new_v4().simple().to_string(), true),
            None => return Err(SettingsError::MissingAdminPassword),
        };
        let credentials = LoginCredentials::try_from_parts(username, &password).map_err(|err| {
            SettingsError::Administrator {
                message: err.to_string(),
            }
        })?;
        Ok(AdministratorSeed {
            credentials,
            generated_password,
        })
    }
}
