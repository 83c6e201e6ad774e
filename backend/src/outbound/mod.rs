//! Outbound adapters implementing domain ports.
//!
//! - **directory**: JSON file of principals with SHA-256 password digests.

pub mod directory;
