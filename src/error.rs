//! Error types.
//!
//! Domain errors are grouped into sub-enums so callers can match on the
//! failure class they care about; everything converts into the top-level
//! [`Error`] via `#[from]`.

use thiserror::Error;

/// Envelope encryption/decryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    /// Wrong PIN or tampered ciphertext. The AEAD tag check cannot
    /// distinguish the two, so neither can we.
    #[error("authentication failed: wrong PIN or corrupted data")]
    AuthenticationFailed,

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Credential store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The envelope decrypted but the payload is not a credential list.
    #[error("malformed store: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("credential already exists: {0}")]
    DuplicateName(String),

    #[error("credential not found: {0}")]
    NotFound(String),

    #[error("no credential at index {index}: store has {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to read store file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write store file: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Configuration file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unable to determine the platform config directory")]
    NoConfigDir,
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("credential name cannot be empty")]
    EmptyName,

    #[error("PIN cannot be empty")]
    EmptyPin,
}

/// Provider login failures.
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("{tool} not found in PATH")]
    MissingTool { tool: String },

    #[error("{tool} exited with {status}")]
    CommandFailed { tool: String, status: String },
}

/// Top-level error for all foxhole operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
