//! Authentication primitives: email addresses and login credentials.
//!
//! Inbound adapters deal with untyped payloads; by the time values reach these
//! constructors they are plain strings. The constructors enforce the shape
//! rules and nothing else. Whether the credentials are *correct* is for an
//! [`crate::domain::ports::AuthenticationProvider`] to decide.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;
use zeroize::Zeroizing;

/// Domain error returned when login payload values are malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was empty once trimmed.
    #[error("email must not be blank")]
    BlankEmail,
    /// Email did not satisfy address syntax.
    #[error("email must be a valid address")]
    InvalidEmail,
}

/// Syntactically valid email address, trimmed of surrounding whitespace.
///
/// # Examples
/// ```
/// use portal::domain::EmailAddress;
///
/// let email = EmailAddress::new("  ada@example.com ").unwrap();
/// assert_eq!(email.as_ref(), "ada@example.com");
/// assert!(EmailAddress::new("ada").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an address.
    ///
    /// # Errors
    /// [`LoginValidationError::BlankEmail`] for blank input and
    /// [`LoginValidationError::InvalidEmail`] when the syntax check fails.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LoginValidationError> {
        let normalized = raw.as_ref().trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::BlankEmail);
        }
        let candidate = normalized.to_owned();
        if !candidate.validate_email() || !has_qualified_domain(&candidate) {
            return Err(LoginValidationError::InvalidEmail);
        }
        Ok(Self(candidate))
    }
}

/// Domains need a dot unless they are `localhost`.
fn has_qualified_domain(address: &str) -> bool {
    address.rsplit_once('@').is_some_and(|(_, domain)| {
        domain.eq_ignore_ascii_case("localhost")
            || domain
                .split('.')
                .filter(|label| !label.is_empty())
                .count()
                >= 2
    })
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = LoginValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated login credentials handed to authentication providers.
///
/// ## Invariants
/// - `email` is a valid [`EmailAddress`].
/// - `password` is kept verbatim, including surrounding whitespace, and may be
///   empty. It is zeroed on drop and never printed by `Debug`.
///
/// # Examples
/// ```
/// use portal::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("admin@example.com", "s3cret").unwrap();
/// assert_eq!(creds.email().as_ref(), "admin@example.com");
/// assert_eq!(creds.password(), "s3cret");
/// assert!(!format!("{creds:?}").contains("s3cret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    ///
    /// # Errors
    /// Propagates the [`EmailAddress`] validation failure.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        Ok(Self::new(EmailAddress::new(email)?, password))
    }

    /// Pair an already validated address with a password.
    pub fn new(email: EmailAddress, password: &str) -> Self {
        Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        }
    }

    /// Address used as the login identifier.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
