//! Domain ports for the hexagonal boundary.

mod authentication_provider;

#[cfg(test)]
pub use authentication_provider::MockAuthenticationProvider;
pub use authentication_provider::{AuthenticationProvider, FixtureAuthenticationProvider};
#[cfg(test)]
pub(crate) use authentication_provider::{
    FIXTURE_DISPLAY_NAME, FIXTURE_EMAIL, FIXTURE_PASSWORD, FIXTURE_PRINCIPAL_ID,
};
