//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::test::TestRequest;
use actix_web::{App, web};
use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::domain::{
    ApplicationsService, CredentialHasher, LoginCredentials, RepositoryLoginService,
};
use crate::middleware::Trace;
use crate::outbound::memory::MemoryStore;
use crate::test_support::MutableClock;

use super::api_scope;
use super::state::HttpState;

/// Username of the administrator seeded by [`memory_state`].
pub const TEST_ADMIN_USERNAME: &str = "Admin";
/// Password of the administrator seeded by [`memory_state`].
pub const TEST_ADMIN_PASSWORD: &str = "Admin123!";

/// Session middleware with a fresh key and the `Secure` flag off for plain
/// HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The `session` cookie set by `response`, if any.
pub fn session_cookie<B: MessageBody>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(|cookie| cookie.into_owned())
}

/// Application wired like production, with a throwaway session key.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope().wrap(test_session_middleware()))
}

/// `POST /api/admin/login` with the given credentials.
pub fn login_request(username: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/api/admin/login")
        .set_json(serde_json::json!({ "username": username, "password": password }))
}

/// In-memory state plus handles tests use to steer it.
pub struct MemoryHarness {
    pub state: HttpState,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<MutableClock>,
}

/// Build HTTP state over a fresh [`MemoryStore`] seeded with the test
/// administrator, using cheap hashing and a clock frozen at `now`.
pub fn memory_state(now: DateTime<Utc>) -> MemoryHarness {
    let clock = Arc::new(MutableClock::new(now));
    let hasher = CredentialHasher::low_cost();
    let admin = match LoginCredentials::try_from_parts(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD) {
        Ok(admin) => admin,
        Err(err) => panic!("test admin credentials: {err}"),
    };
    let dyn_clock: Arc<dyn Clock> = clock.clone();
    let store = match MemoryStore::with_administrator(dyn_clock.clone(), hasher.clone(), &admin) {
        Ok(store) => Arc::new(store),
        Err(err) => panic!("seed store: {err}"),
    };

    let applications = Arc::new(ApplicationsService::new(store.clone(), dyn_clock));
    let login = match RepositoryLoginService::new(store.clone(), hasher) {
        Ok(login) => Arc::new(login),
        Err(err) => panic!("login service: {err}"),
    };
    MemoryHarness {
        state: HttpState::new(applications, login, store.clone()),
        store,
        clock,
    }
}
