//! Application API handlers.
//!
//! ```text
//! POST   /api/applications            {"firstName":"Ana",...}
//! GET    /api/applications
//! GET    /api/applications/stats
//! GET    /api/applications/{id}
//! DELETE /api/applications/{id}
//! ```
//!
//! Everything except submission requires an administrator session.

use actix_web::{HttpResponse, delete, get, post, web};
use serde_json::Value;

use crate::domain::{
    APPLICATION_NOT_FOUND, Application, ApplicationId, ApplicationStats, Error,
};

use super::ApiResult;
use super::auth::require_admin;
use super::error::ErrorEnvelope;
use super::responses::{MessageResponse, NO_STORE, SubmitResponse};
use super::session::SessionContext;
use super::state::HttpState;

/// Non-numeric identifiers can never name a record.
fn parse_id(raw: &str) -> ApiResult<ApplicationId> {
    raw.parse()
        .map_err(|_| Error::not_found(APPLICATION_NOT_FOUND))
}

/// Submit an employment application.
#[utoipa::path(
    post,
    path = "/api/applications",
    request_body(content = super::schemas::ApplicationRequestSchema, description = "Application form"),
    responses(
        (status = 201, description = "Application stored", body = SubmitResponse),
        (status = 400, description = "Validation error", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["applications"],
    operation_id = "submitApplication",
    security([])
)]
#[post("/applications")]
pub async fn submit_application(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let application = state.applications.submit(&payload).await?;
    Ok(HttpResponse::Created().json(SubmitResponse::new(application)))
}

/// List every application, newest first.
#[utoipa::path(
    get,
    path = "/api/applications",
    responses(
        (status = 200, description = "Applications", body = [Application]),
        (status = 401, description = "Authentication required", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["applications"],
    operation_id = "listApplications"
)]
#[get("/applications")]
pub async fn list_applications(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    require_admin(&session, &state).await?;
    let applications = state.applications.list().await?;
    Ok(HttpResponse::Ok().insert_header(NO_STORE).json(applications))
}

/// Dashboard aggregates.
#[utoipa::path(
    get,
    path = "/api/applications/stats",
    responses(
        (status = 200, description = "Statistics", body = ApplicationStats),
        (status = 401, description = "Authentication required", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["applications"],
    operation_id = "applicationStats"
)]
#[get("/applications/stats")]
pub async fn application_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    require_admin(&session, &state).await?;
    let stats = state.applications.statistics().await?;
    Ok(HttpResponse::Ok().insert_header(NO_STORE).json(stats))
}

/// Fetch one application.
#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    params(("id" = u64, Path, description = "Application identifier")),
    responses(
        (status = 200, description = "Application", body = Application),
        (status = 401, description = "Authentication required", body = ErrorEnvelope),
        (status = 404, description = "Application not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["applications"],
    operation_id = "getApplication"
)]
#[get("/applications/{id}")]
pub async fn get_application(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    require_admin(&session, &state).await?;
    let id = parse_id(&path)?;
    let application = state.applications.fetch(id).await?;
    Ok(HttpResponse::Ok().insert_header(NO_STORE).json(application))
}

/// Delete one application.
#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    params(("id" = u64, Path, description = "Application identifier")),
    responses(
        (status = 200, description = "Application deleted", body = MessageResponse),
        (status = 401, description = "Authentication required", body = ErrorEnvelope),
        (status = 404, description = "Application not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["applications"],
    operation_id = "deleteApplication"
)]
#[delete("/applications/{id}")]
pub async fn delete_application(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    require_admin(&session, &state).await?;
    let id = parse_id(&path)?;
    state.applications.delete(id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::ok("Application deleted")))
}
