//! Route table for the HTTP adapter.

use actix_web::web;

use super::dashboard::dashboard;
use super::error::json_error_handler;
use super::health::{live, ready};
use super::login::login;

/// Register every endpoint and the JSON extractor configuration.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>`, and
/// wrap the app in session middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use portal::inbound::http::router::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(login)
        .service(dashboard)
        .service(ready)
        .service(live);
}
