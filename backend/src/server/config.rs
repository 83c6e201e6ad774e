//! Listener and identity-provider settings loaded via OrthoConfig.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use portal::domain::ports::AuthenticationProvider;
use portal::inbound::http::session_config::SessionSettings;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Values read from `PORTAL_*` environment variables and the command line.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTAL")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Principal directory file. Without one the fixture provider is used.
    pub directory_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Host to bind, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to bind, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address built from [`Self::host`] and [`Self::port`].
    ///
    /// # Errors
    /// Returns `InvalidInput` when the host is not an IP address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let ip = self.host().parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid PORTAL_HOST '{}': {err}", self.host()),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

/// Everything [`super::create_server`] needs.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) provider: Arc<dyn AuthenticationProvider>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(
        session: SessionSettings,
        bind_addr: SocketAddr,
        provider: Arc<dyn AuthenticationProvider>,
    ) -> Self {
        Self {
            session,
            bind_addr,
            provider,
        }
    }
}
