//! Portal entry-point: loads configuration, picks the identity provider and
//! serves the login, dashboard and health endpoints.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use portal::domain::ports::{AuthenticationProvider, FixtureAuthenticationProvider};
use portal::inbound::http::health::HealthState;
use portal::inbound::http::session_config::fingerprint::key_fingerprint;
use portal::inbound::http::session_config::{BuildMode, session_settings_from_env};
use portal::outbound::directory::DirectoryAuthenticationProvider;
use server::{ServerConfig, ServerSettings, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    info!(fingerprint = %key_fingerprint(&session.key), "session key loaded");

    let provider = build_provider(&settings)?;
    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(session, settings.bind_addr()?, provider);
    create_server(health_state, config)?.await
}

fn build_provider(settings: &ServerSettings) -> std::io::Result<Arc<dyn AuthenticationProvider>> {
    match &settings.directory_path {
        Some(path) => {
            let directory = DirectoryAuthenticationProvider::load(path).map_err(std::io::Error::other)?;
            Ok(Arc::new(directory))
        }
        None => {
            warn!("no principal directory configured; using the fixture provider");
            Ok(Arc::new(FixtureAuthenticationProvider))
        }
    }
}
