//! OpenAPI document for the HTTP surface.
//!
//! Served by Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::login::{InvalidCredentialsBody, LoginRequest, LoginSuccessBody};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FieldErrorsSchema, PrincipalSchema,
};

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
                "Session cookie issued by POST /login/.",
            ))),
        );
    }
}

/// OpenAPI document for the portal API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Portal API",
        description = "Email and password login issuing a session, and the dashboard it leads to."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::login::login,
        crate::inbound::http::dashboard::dashboard,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        LoginRequest,
        LoginSuccessBody,
        InvalidCredentialsBody,
        FieldErrorsSchema,
        PrincipalSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "auth", description = "Session-issuing login"),
        (name = "dashboard", description = "Post-login destination"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
