//! Login use-case: field errors, outcomes, and the service that drives an
//! [`AuthenticationProvider`].

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::ports::AuthenticationProvider;
use super::{Error, LoginCredentials, Principal};

/// Where clients are sent after a successful login.
pub const DASHBOARD_REDIRECT: &str = "/dashboard/";

/// Reason a single field was rejected.
///
/// The rendered messages are part of the public contract; clients match on
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldIssue {
    /// Field absent or `null`.
    #[error("This field is required.")]
    Required,
    /// Field present with a non-string value.
    #[error("Not a valid string.")]
    NotAString,
    /// Field blank after trimming.
    #[error("This field may not be blank.")]
    Blank,
    /// Field fails email syntax.
    #[error("Enter a valid email address.")]
    InvalidEmail,
}

/// Per-field validation messages, keyed by field name.
///
/// Serialises as `{"<field>": ["<message>", ...]}` with fields in name order.
/// Messages describe the problem and never echo the submitted value.
///
/// # Examples
/// ```
/// use portal::domain::{FieldErrors, FieldIssue};
///
/// let mut errors = FieldErrors::default();
/// errors.push("email", FieldIssue::Required);
/// assert_eq!(
///     serde_json::to_string(&errors).unwrap(),
///     r#"{"email":["This field is required."]}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    /// Record an issue against `field`.
    pub fn push(&mut self, field: &'static str, issue: FieldIssue) {
        self.0.entry(field).or_default().push(issue.to_string());
    }

    /// Whether no field has been rejected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of the rejected fields in order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// Result of one login request. Exactly one is produced per request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Credentials accepted; the caller establishes a session for `principal`.
    Success {
        /// Identity to bind to the session.
        principal: Principal,
        /// Where the client should navigate next.
        redirect_url: &'static str,
    },
    /// Credentials well formed but rejected. Unknown users and wrong
    /// passwords are indistinguishable.
    InvalidCredentials,
    /// Payload failed field validation.
    ValidationError(FieldErrors),
}

/// Drives a single authentication attempt against the injected provider.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use portal::domain::ports::FixtureAuthenticationProvider;
/// use portal::domain::{LoginCredentials, LoginOutcome, LoginService};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let service = LoginService::new(Arc::new(FixtureAuthenticationProvider));
/// let creds = LoginCredentials::try_from_parts("admin@example.com", "wrong").unwrap();
/// let outcome = service.log_in(&creds).await.unwrap();
/// assert_eq!(outcome, LoginOutcome::InvalidCredentials);
/// # });
/// ```
#[derive(Clone)]
pub struct LoginService {
    provider: Arc<dyn AuthenticationProvider>,
}

impl LoginService {
    /// Wrap an authentication provider.
    pub fn new(provider: Arc<dyn AuthenticationProvider>) -> Self {
        Self { provider }
    }

    /// Authenticate once and classify the result.
    ///
    /// # Errors
    /// Provider failures are returned untouched so the adapter can map them
    /// to a server error.
    pub async fn log_in(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, Error> {
        match self.provider.authenticate(credentials).await? {
            Some(principal) => {
                info!(
                    email = %credentials.email(),
                    principal_id = %principal.id(),
                    "login succeeded"
                );
                Ok(LoginOutcome::Success {
                    principal,
                    redirect_url: DASHBOARD_REDIRECT,
                })
            }
            None => {
                warn!(email = %credentials.email(), "login rejected");
                Ok(LoginOutcome::InvalidCredentials)
            }
        }
    }
}
