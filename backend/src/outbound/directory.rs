//! File-backed identity directory.
//!
//! The directory is a JSON array of principals loaded once at startup:
//!
//! ```json
//! [{"id":"…","email":"ada@example.com","displayName":"Ada","passwordSha256":"…"}]
//! ```
//!
//! Password digests are lowercase hex SHA-256. Comparison is constant time,
//! and an unknown email still performs a comparison against a fixed digest.

use std::collections::HashMap;
use std::hint::black_box;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use constant_time_eq::constant_time_eq;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::info;
use zeroize::Zeroizing;

use crate::cap_fs;
use crate::domain::ports::AuthenticationProvider;
use crate::domain::{
    EmailAddress, Error, LoginCredentials, LoginValidationError, Principal, PrincipalId,
    PrincipalIdError,
};

const DIGEST_HEX_LEN: usize = 64;
/// Compared against when the email is unknown.
const UNKNOWN_PRINCIPAL_DIGEST: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Errors raised while loading a directory file.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryLoadError {
    /// The file could not be read.
    #[error("failed to read principal directory at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a JSON array of principal records.
    #[error("principal directory at {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A record carries an unusable id.
    #[error("principal #{index} has an invalid id: {source}")]
    InvalidId {
        index: usize,
        #[source]
        source: PrincipalIdError,
    },
    /// A record carries an unusable email.
    #[error("principal #{index} has an invalid email: {source}")]
    InvalidEmail {
        index: usize,
        #[source]
        source: LoginValidationError,
    },
    /// A digest is not 64 lowercase hex characters.
    #[error("principal #{index} has a malformed passwordSha256")]
    InvalidDigest { index: usize },
    /// Two records share an email.
    #[error("email {email} appears more than once")]
    DuplicateEmail { email: String },
    /// Two records share an id.
    #[error("principal id {id} is used by more than one record")]
    DuplicateId { id: PrincipalId },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DirectoryRecord {
    id: String,
    email: String,
    display_name: String,
    password_sha256: String,
}

struct DirectoryEntry {
    principal: Principal,
    password_sha256: String,
}

/// Authentication provider backed by a JSON directory file.
pub struct DirectoryAuthenticationProvider {
    by_email: HashMap<String, DirectoryEntry>,
    by_id: HashMap<PrincipalId, String>,
}

impl DirectoryAuthenticationProvider {
    /// Load and validate the directory at `path`.
    ///
    /// # Errors
    /// Returns [`DirectoryLoadError`] when the file is unreadable, malformed,
    /// or contains an invalid or duplicate record.
    pub fn load(path: &Path) -> Result<Self, DirectoryLoadError> {
        let bytes = cap_fs::read_file(path).map_err(|source| DirectoryLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let records = serde_json::from_slice(&bytes).map_err(|source| DirectoryLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let provider = Self::from_records(records)?;
        info!(
            path = %path.display(),
            principals = provider.by_email.len(),
            "loaded principal directory"
        );
        Ok(provider)
    }

    /// Build a directory from JSON bytes.
    ///
    /// # Errors
    /// As for [`Self::load`], minus the read failure.
    ///
    /// # Examples
    /// ```
    /// use portal::outbound::directory::DirectoryAuthenticationProvider;
    ///
    /// let json = br#"[{
    ///     "id": "123e4567-e89b-12d3-a456-426614174000",
    ///     "email": "ada@example.com",
    ///     "displayName": "Ada Lovelace",
    ///     "passwordSha256": "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
    /// }]"#;
    /// let directory = DirectoryAuthenticationProvider::from_json(json).unwrap();
    /// assert_eq!(directory.len(), 1);
    /// ```
    pub fn from_json(bytes: &[u8]) -> Result<Self, DirectoryLoadError> {
        let records = serde_json::from_slice(bytes).map_err(|source| DirectoryLoadError::Parse {
            path: PathBuf::from("<memory>"),
            source,
        })?;
        Self::from_records(records)
    }

    fn from_records(records: Vec<DirectoryRecord>) -> Result<Self, DirectoryLoadError> {
        let mut by_email = HashMap::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let entry = DirectoryEntry::try_from_record(index, record)?;
            let email = entry.principal.email().to_string();
            if by_email.contains_key(&email) {
                return Err(DirectoryLoadError::DuplicateEmail { email });
            }
            let id = entry.principal.id();
            if by_id.contains_key(&id) {
                return Err(DirectoryLoadError::DuplicateId { id });
            }
            by_id.insert(id, email.clone());
            by_email.insert(email, entry);
        }
        Ok(Self { by_email, by_id })
    }

    /// Number of principals in the directory.
    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    /// Whether the directory holds no principals.
    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }
}

impl DirectoryEntry {
    fn try_from_record(index: usize, record: DirectoryRecord) -> Result<Self, DirectoryLoadError> {
        let id = PrincipalId::new(&record.id)
            .map_err(|source| DirectoryLoadError::InvalidId { index, source })?;
        let email = EmailAddress::new(&record.email)
            .map_err(|source| DirectoryLoadError::InvalidEmail { index, source })?;
        let digest = record.password_sha256;
        if digest.len() != DIGEST_HEX_LEN
            || !digest
                .bytes()
                .all(|byte| byte.is_ascii_digit() || (b'a'..=b'f').contains(&byte))
        {
            return Err(DirectoryLoadError::InvalidDigest { index });
        }
        Ok(Self {
            principal: Principal::new(id, email, record.display_name),
            password_sha256: digest,
        })
    }
}

/// Lowercase hex SHA-256 of `password`, the form stored in directory files.
pub fn password_digest(password: &str) -> Zeroizing<String> {
    Zeroizing::new(hex::encode(Sha256::digest(password.as_bytes())))
}

#[async_trait]
impl AuthenticationProvider for DirectoryAuthenticationProvider {
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Principal>, Error> {
        let submitted = password_digest(credentials.password());
        match self.by_email.get(credentials.email().as_ref()) {
            Some(entry) => {
                let matches =
                    constant_time_eq(submitted.as_bytes(), entry.password_sha256.as_bytes());
                Ok(matches.then(|| entry.principal.clone()))
            }
            None => {
                black_box(constant_time_eq(
                    black_box(submitted.as_bytes()),
                    UNKNOWN_PRINCIPAL_DIGEST.as_bytes(),
                ));
                Ok(None)
            }
        }
    }

    async fn find_principal(&self, id: &PrincipalId) -> Result<Option<Principal>, Error> {
        Ok(self
            .by_id
            .get(id)
            .and_then(|email| self.by_email.get(email))
            .map(|entry| entry.principal.clone()))
    }
}
