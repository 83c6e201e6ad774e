//! HTTP inbound adapter.

pub mod dashboard;
pub mod error;
pub mod health;
pub mod login;
pub mod router;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
