//! HTTP inbound adapter exposing the REST endpoints.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod error;
pub mod health;
pub mod responses;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// `/api` scope with every application and admin route registered.
///
/// The caller wraps it in the session middleware. `stats` is registered
/// ahead of `{id}` so it is not captured as an identifier.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(applications::submit_application)
        .service(applications::list_applications)
        .service(applications::application_stats)
        .service(applications::get_application)
        .service(applications::delete_application)
        .service(admin::login)
        .service(admin::logout)
        .service(admin::current_session)
}
