//! Email and password login issuing a cookie session, plus the dashboard
//! route clients are sent to afterwards.
//!
//! - [`domain`]: credentials, principals, the login use-case and its port.
//! - [`inbound::http`]: Actix handlers, session helpers and configuration.
//! - [`outbound`]: the file-backed identity directory.

pub(crate) mod cap_fs;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
