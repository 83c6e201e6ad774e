//! Session key fingerprints for startup logs.
//!
//! Operators compare fingerprints across replicas to confirm they share a
//! key. Only a truncated digest of the signing half is ever printed.

use actix_web::cookie::Key;
use sha2::{Digest, Sha256};

const FINGERPRINT_BYTES: usize = 8;

/// Truncated SHA-256 of the key's signing material as lowercase hex.
///
/// # Examples
/// ```
/// use actix_web::cookie::Key;
/// use portal::inbound::http::session_config::fingerprint::key_fingerprint;
///
/// let fp = key_fingerprint(&Key::generate());
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn key_fingerprint(key: &Key) -> String {
    let digest = Sha256::digest(key.signing());
    hex::encode(digest.get(..FINGERPRINT_BYTES).unwrap_or_default())
}
