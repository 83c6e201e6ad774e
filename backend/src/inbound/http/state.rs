//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data`, so they depend on the login
//! use-case and the provider port rather than on a concrete directory.

use std::sync::Arc;

use crate::domain::LoginService;
use crate::domain::ports::AuthenticationProvider;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Login use-case.
    pub login: LoginService,
    /// Provider used to resolve the principal behind a session.
    pub principals: Arc<dyn AuthenticationProvider>,
}

impl HttpState {
    /// Build state around a single authentication provider.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use portal::domain::ports::FixtureAuthenticationProvider;
    /// use portal::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureAuthenticationProvider));
    /// let _cloned = state.clone();
    /// ```
    pub fn new(provider: Arc<dyn AuthenticationProvider>) -> Self {
        Self {
            login: LoginService::new(Arc::clone(&provider)),
            principals: provider,
        }
    }
}
