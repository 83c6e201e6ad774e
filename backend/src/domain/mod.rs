//! Domain primitives, ports, and the login use-case.
//!
//! Purpose: keep credential shapes, principals, and login outcomes free of
//! HTTP concerns. Inbound adapters translate payloads into these types and
//! map the results back out.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - EmailAddress / LoginCredentials: validated login input.
//! - Principal / PrincipalId: authenticated identity.
//! - LoginService / LoginOutcome / FieldErrors: the login use-case.
//! - TraceId: request-scoped correlation identifier.

pub mod auth;
pub mod error;
pub mod login;
pub mod ports;
pub mod principal;
pub mod trace_id;

pub use self::auth::{EmailAddress, LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::login::{DASHBOARD_REDIRECT, FieldErrors, FieldIssue, LoginOutcome, LoginService};
pub use self::principal::{Principal, PrincipalId, PrincipalIdError};
pub use self::trace_id::TraceId;

/// Header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
