//! OpenAPI schemas for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their wire
//! shape and are registered under the domain type's name.

use std::collections::HashMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A collaborator such as the identity directory is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// Unexpected server failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "unauthorized")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "login required")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::FieldErrors`]: field name to messages.
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldErrors)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct FieldErrorsSchema(HashMap<String, Vec<String>>);

/// OpenAPI schema for [`crate::domain::Principal`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Principal, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PrincipalSchema {
    /// Stable principal identifier.
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    /// Login address.
    #[schema(example = "admin@example.com")]
    email: String,
    /// Name shown on the dashboard.
    #[schema(example = "Ada Lovelace")]
    display_name: String,
}
