//! Authenticated identity returned by authentication providers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EmailAddress;

/// Validation errors for [`PrincipalId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PrincipalIdError {
    /// Input was empty.
    #[error("principal id must not be empty")]
    Empty,
    /// Input was not a canonical UUID.
    #[error("principal id must be a valid UUID")]
    Invalid,
}

/// Stable principal identifier stored as a UUID.
///
/// # Examples
/// ```
/// use portal::domain::PrincipalId;
///
/// let id = PrincipalId::new("123e4567-e89b-12d3-a456-426614174000").unwrap();
/// assert_eq!(id.to_string(), "123e4567-e89b-12d3-a456-426614174000");
/// assert!(PrincipalId::new(" 123e4567-e89b-12d3-a456-426614174000").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    /// Validate and construct a [`PrincipalId`].
    ///
    /// # Errors
    /// Returns [`PrincipalIdError`] for empty, padded, or non-UUID input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, PrincipalIdError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(PrincipalIdError::Empty);
        }
        if raw.trim() != raw {
            return Err(PrincipalIdError::Invalid);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| PrincipalIdError::Invalid)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PrincipalId> for String {
    fn from(value: PrincipalId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for PrincipalId {
    type Error = PrincipalIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Identity established by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    id: PrincipalId,
    email: EmailAddress,
    display_name: String,
}

impl Principal {
    /// Build a principal from validated parts.
    pub fn new(id: PrincipalId, email: EmailAddress, display_name: impl Into<String>) -> Self {
        Self {
            id,
            email,
            display_name: display_name.into(),
        }
    }

    /// Stable identifier stored in the session.
    pub fn id(&self) -> PrincipalId {
        self.id
    }

    /// Login address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Name shown on the dashboard.
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("", PrincipalIdError::Empty)]
    #[case("not-a-uuid", PrincipalIdError::Invalid)]
    #[case("123e4567-e89b-12d3-a456-426614174000 ", PrincipalIdError::Invalid)]
    fn rejects_invalid_ids(#[case] raw: &str, #[case] expected: PrincipalIdError) {
        assert_eq!(PrincipalId::new(raw), Err(expected));
    }

    #[rstest]
    fn principal_serialises_camel_case() {
        let principal = Principal::new(
            PrincipalId::new("123e4567-e89b-12d3-a456-426614174000").expect("fixture id"),
            EmailAddress::new("ada@example.com").expect("fixture email"),
            "Ada Lovelace",
        );

        let value = serde_json::to_value(&principal).expect("serialises");
        assert_eq!(
            value,
            json!({
                "id": "123e4567-e89b-12d3-a456-426614174000",
                "email": "ada@example.com",
                "displayName": "Ada Lovelace",
            })
        );
    }
}
