//! Driven port for the identity subsystem that checks credentials.
//!
//! Inbound adapters never see how principals are stored. The server wires one
//! implementation at startup and hands it to [`crate::domain::LoginService`]
//! and the dashboard handler as `Arc<dyn AuthenticationProvider>`.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Error, LoginCredentials, Principal, PrincipalId};

/// Identity lookups used by the login and dashboard flows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationProvider: Send + Sync {
    /// Check credentials. `Ok(None)` means "rejected", whatever the cause.
    ///
    /// Errors are reserved for the provider itself being unusable.
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Principal>, Error>;

    /// Resolve the principal bound to an established session.
    async fn find_principal(&self, id: &PrincipalId) -> Result<Option<Principal>, Error>;
}

pub(crate) const FIXTURE_EMAIL: &str = "admin@example.com";
pub(crate) const FIXTURE_PASSWORD: &str = "password";
pub(crate) const FIXTURE_PRINCIPAL_ID: &str = "123e4567-e89b-12d3-a456-426614174000";
pub(crate) const FIXTURE_DISPLAY_NAME: &str = "Ada Lovelace";

/// In-memory provider used for development and tests when no directory file
/// is configured.
///
/// `admin@example.com` / `password` authenticates and yields a fixed
/// principal.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAuthenticationProvider;

impl FixtureAuthenticationProvider {
    /// The single principal this provider knows.
    pub(crate) fn principal() -> Result<Principal, Error> {
        let id = PrincipalId::new(FIXTURE_PRINCIPAL_ID)
            .map_err(|err| Error::internal(format!("invalid fixture principal id: {err}")))?;
        let email = EmailAddress::new(FIXTURE_EMAIL)
            .map_err(|err| Error::internal(format!("invalid fixture email: {err}")))?;
        Ok(Principal::new(id, email, FIXTURE_DISPLAY_NAME))
    }
}

#[async_trait]
impl AuthenticationProvider for FixtureAuthenticationProvider {
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Principal>, Error> {
        if credentials.email().as_ref() == FIXTURE_EMAIL
            && credentials.password() == FIXTURE_PASSWORD
        {
            Self::principal().map(Some)
        } else {
            Ok(None)
        }
    }

    async fn find_principal(&self, id: &PrincipalId) -> Result<Option<Principal>, Error> {
        let principal = Self::principal()?;
        Ok((principal.id() == *id).then_some(principal))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin@example.com", "password", true)]
    #[case("admin@example.com", "wrong", false)]
    #[case("admin@example.com", "", false)]
    #[case("other@example.com", "password", false)]
    #[tokio::test]
    async fn fixture_provider_accepts_only_the_fixture_pair(
        #[case] email: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let creds = LoginCredentials::try_from_parts(email, password).expect("credentials shape");
        let result = FixtureAuthenticationProvider
            .authenticate(&creds)
            .await
            .expect("fixture provider never fails");
        match (should_succeed, result) {
            (true, Some(principal)) => {
                assert_eq!(principal.id().to_string(), FIXTURE_PRINCIPAL_ID);
                assert_eq!(principal.display_name(), FIXTURE_DISPLAY_NAME);
            }
            (false, None) => {}
            (true, None) => panic!("expected success for {email}"),
            (false, Some(principal)) => panic!("expected rejection, got {principal:?}"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn find_principal_resolves_only_the_fixture_id() {
        let known = PrincipalId::new(FIXTURE_PRINCIPAL_ID).expect("fixture id");
        let found = FixtureAuthenticationProvider
            .find_principal(&known)
            .await
            .expect("fixture provider never fails");
        assert_eq!(found.map(|p| p.id()), Some(known));

        let missing = FixtureAuthenticationProvider
            .find_principal(&PrincipalId::random())
            .await
            .expect("fixture provider never fails");
        assert!(missing.is_none());
    }
}
