//! Session helpers that keep handlers free of framework-specific logic.
//!
//! The cookie stores nothing but the administrator's numeric user id. The
//! cookie itself is encrypted and authenticated by the session middleware.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const ADMIN_ID_KEY: &str = "admin_id";

/// Message returned when no usable administrator session is present.
pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";

/// Newtype wrapper exposing administrator session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Start a fresh session for `user_id`.
    ///
    /// The session key is renewed first so a pre-login cookie cannot be
    /// promoted into an authenticated one.
    pub fn start_admin(&self, user_id: UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(ADMIN_ID_KEY, user_id.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Administrator id stored in the session, if any.
    ///
    /// Unreadable values are treated as an absent session.
    pub fn admin_id(&self) -> Option<UserId> {
        match self.0.get::<u64>(ADMIN_ID_KEY) {
            Ok(id) => id.map(UserId::new),
            Err(error) => {
                warn!(%error, "discarding unreadable session value");
                None
            }
        }
    }

    /// Require an administrator id or fail with `unauthorized`.
    pub fn require_admin_id(&self) -> Result<UserId, Error> {
        self.admin_id()
            .ok_or_else(|| Error::unauthorized(AUTHENTICATION_REQUIRED))
    }

    /// Drop every session value and expire the cookie.
    pub fn end(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
