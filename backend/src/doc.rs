//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP endpoint plus the request, response and
//! error schemas they reference. The document is served by Swagger UI in
//! debug builds and exported by the `openapi-dump` binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    Application, ApplicationStats, EducationLevel, Error, ErrorCode, FieldError, FieldErrorCode,
};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::responses::{MessageResponse, SessionStatus, SubmitResponse};
use crate::inbound::http::schemas::{ApplicationRequestSchema, LoginRequestSchema};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/admin/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Hiring backend API",
        description = "Public job application intake plus a session-authenticated admin console.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::applications::submit_application,
        crate::inbound::http::applications::list_applications,
        crate::inbound::http::applications::application_stats,
        crate::inbound::http::applications::get_application,
        crate::inbound::http::applications::delete_application,
        crate::inbound::http::admin::login,
        crate::inbound::http::admin::logout,
        crate::inbound::http::admin::current_session,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Application,
        ApplicationStats,
        EducationLevel,
        Error,
        ErrorCode,
        ErrorEnvelope,
        FieldError,
        FieldErrorCode,
        SubmitResponse,
        MessageResponse,
        SessionStatus,
        ApplicationRequestSchema,
        LoginRequestSchema,
    )),
    tags(
        (name = "applications", description = "Submission and review of job applications"),
        (name = "admin", description = "Administrator session management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Checks on the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/applications")]
    #[case("/api/applications/stats")]
    #[case("/api/applications/{id}")]
    #[case("/api/admin/login")]
    #[case("/api/admin/logout")]
    #[case("/api/admin/session")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    #[case("Application", &["id", "firstName", "submittedAt"])]
    #[case("ApplicationStats", &["total", "recent", "topPosition", "averageEducation"])]
    #[case("FieldError", &["field", "code", "message"])]
    #[case("ApplicationRequest", &["firstName", "email", "motivation"])]
    fn schemas_use_wire_field_names(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas
            .get(name)
            .unwrap_or_else(|| panic!("{name} schema"));
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    fn session_cookie_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
