//! Administrator session handlers.
//!
//! ```text
//! POST /api/admin/login   {"username":"Admin","password":"..."}
//! POST /api/admin/logout
//! GET  /api/admin/session
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde_json::Value;

use crate::domain::Error;
use crate::domain::validation::validate_login_input;

use super::ApiResult;
use super::auth::require_admin;
use super::error::ErrorEnvelope;
use super::responses::{MessageResponse, NO_STORE, SessionStatus};
use super::session::SessionContext;
use super::state::HttpState;

/// Authenticate an administrator and start a cookie session.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body(content = super::schemas::LoginRequestSchema, description = "Credentials"),
    responses(
        (status = 200, description = "Login successful", body = MessageResponse,
            headers(("Set-Cookie" = String, description = "Encrypted session cookie"))),
        (status = 400, description = "Validation error", body = ErrorEnvelope),
        (status = 401, description = "Invalid credentials", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["admin"],
    operation_id = "adminLogin",
    security([])
)]
#[post("/admin/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let credentials = validate_login_input(&payload).map_err(Error::from)?;
    let user_id = state.login.authenticate(&credentials).await?;
    session.start_admin(user_id)?;
    Ok(HttpResponse::Ok().json(MessageResponse::ok("Login successful")))
}

/// End the administrator session. Succeeds without a session too.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    ),
    tags = ["admin"],
    operation_id = "adminLogout",
    security([])
)]
#[post("/admin/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.end();
    HttpResponse::Ok().json(MessageResponse::ok("Logged out"))
}

/// Report the administrator behind the current session.
#[utoipa::path(
    get,
    path = "/api/admin/session",
    responses(
        (status = 200, description = "Active session", body = SessionStatus),
        (status = 401, description = "Authentication required", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["admin"],
    operation_id = "adminSession"
)]
#[get("/admin/session")]
pub async fn current_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user = require_admin(&session, &state).await?;
    Ok(HttpResponse::Ok().insert_header(NO_STORE).json(SessionStatus {
        authenticated: true,
        username: user.username().to_owned(),
    }))
}
