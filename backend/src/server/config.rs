//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use hiring_backend::domain::{CredentialHasher, LoginCredentials};
use hiring_backend::settings::StoreBackend;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: StoreBackend,
    pub(crate) administrator: LoginCredentials,
    pub(crate) hasher: CredentialHasher,
}

impl ServerConfig {
    /// Construct a server configuration backed by the in-memory store.
    #[must_use]
    pub fn new(
        key: Key,
        cookie_secure: bool,
        same_site: SameSite,
        bind_addr: SocketAddr,
        administrator: LoginCredentials,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            store: StoreBackend::Memory,
            administrator,
            hasher: CredentialHasher::default(),
        }
    }

    /// Select the store backend.
    #[must_use]
    pub fn with_store(mut self, store: StoreBackend) -> Self {
        self.store = store;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
