//! Encrypted credential store.
//!
//! The store owns one file: a hex-encoded envelope wrapping the JSON array of
//! credentials. Every public operation is a complete load → mutate → save
//! unit gated by the PIN; nothing is cached between calls and the PIN is
//! never retained.
//!
//! There is no file locking. Two processes racing `persist` resolve as
//! last-writer-wins, which is acceptable for a single-user local tool.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::credential::Credential;
use crate::error::{CipherError, Result, StoreError, ValidationError};

/// Validate store file permissions (Unix only).
#[cfg(unix)]
fn check_file_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = std::fs::metadata(path) {
        let mode = metadata.permissions().mode() & 0o777;
        if mode != 0o600 {
            warn!(
                path = %path.display(),
                mode = %format!("{:o}", mode),
                "store file is not owner-only; run chmod 600"
            );
        }
    }
}

/// PIN-gated credential store backed by a single encrypted file.
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store handle for the given file path.
    ///
    /// The file does not need to exist; an absent file is an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decrypt and deserialize the credential list.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::AuthenticationFailed` for a wrong PIN or a
    /// tampered file, `CipherError::MalformedEnvelope` for undecodable
    /// contents, and `StoreError::Malformed` if the decrypted payload is not
    /// a credential list.
    pub fn open(&self, pin: &str) -> Result<Vec<Credential>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file absent, treating as empty");
            return Ok(Vec::new());
        }

        #[cfg(unix)]
        check_file_permissions(&self.path);

        let bytes = std::fs::read(&self.path).map_err(StoreError::ReadFailed)?;
        let envelope = String::from_utf8(bytes).map_err(|_| {
            CipherError::MalformedEnvelope("store file is not valid text".to_string())
        })?;
        let plaintext = Zeroizing::new(cipher::open(&envelope, pin)?);

        let credentials: Vec<Credential> =
            serde_json::from_slice(&plaintext).map_err(StoreError::Malformed)?;

        debug!(count = credentials.len(), "store loaded");
        Ok(credentials)
    }

    /// Serialize, seal, and write the full credential list.
    ///
    /// The parent directory is created (owner-only) if missing. The file is
    /// written to a sibling temp file and renamed over the target so a
    /// reader never observes a half-written store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` on any file-system failure.
    pub fn persist(&self, credentials: &[Credential], pin: &str) -> Result<()> {
        let plaintext = Zeroizing::new(serde_json::to_vec_pretty(credentials)?);
        let envelope = cipher::seal(&plaintext, pin)?;

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir).map_err(StoreError::WriteFailed)?;
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o700))
                        .map_err(StoreError::WriteFailed)?;
                }
            }
        }

        let tmp = self.tmp_path();
        std::fs::write(&tmp, envelope.as_bytes()).map_err(StoreError::WriteFailed)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o600))
                .map_err(StoreError::WriteFailed)?;
        }

        std::fs::rename(&tmp, &self.path).map_err(StoreError::WriteFailed)?;

        debug!(count = credentials.len(), path = %self.path.display(), "store saved");
        Ok(())
    }

    /// Add a credential, rejecting duplicate names.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name and
    /// `StoreError::DuplicateName` if the name already exists in the store.
    pub fn add(&self, pin: &str, candidate: Credential) -> Result<()> {
        if candidate.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let mut credentials = self.open(pin)?;

        if credentials.iter().any(|c| c.name == candidate.name) {
            return Err(StoreError::DuplicateName(candidate.name).into());
        }

        debug!(name = %candidate.name, kind = %candidate.kind, "adding credential");
        credentials.push(candidate);
        self.persist(&credentials, pin)
    }

    /// List all credentials in insertion order.
    pub fn list(&self, pin: &str) -> Result<Vec<Credential>> {
        self.open(pin)
    }

    /// Remove the credential at `index` and return it.
    ///
    /// The index is only meaningful against the list just returned by the
    /// same `open`/`list` call; for a stable handle use [`Store::remove_named`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if `index >= len`.
    pub fn remove_at(&self, pin: &str, index: usize) -> Result<Credential> {
        let mut credentials = self.open(pin)?;

        if index >= credentials.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: credentials.len(),
            }
            .into());
        }

        let removed = credentials.remove(index);
        self.persist(&credentials, pin)?;

        debug!(name = %removed.name, "credential removed");
        Ok(removed)
    }

    /// Remove the credential with the given name and return it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no credential has that name.
    pub fn remove_named(&self, pin: &str, name: &str) -> Result<Credential> {
        let mut credentials = self.open(pin)?;

        let index = credentials
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        let removed = credentials.remove(index);
        self.persist(&credentials, pin)?;

        debug!(name = %removed.name, "credential removed");
        Ok(removed)
    }

    /// Sibling temp file used for atomic rewrites.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "store".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
