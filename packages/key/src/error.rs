//! Error handling for key provisioning

use hashlab_common::{Classify, ErrorKind};
use thiserror::Error;

/// Key-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Key generation error occurred
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    /// Text is not a `-----BEGIN ... KEY-----` block
    #[error("Invalid PEM: {0}")]
    InvalidPem(String),

    /// PEM framing was fine but the DER inside is not a usable key
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    /// Curve name not recognised
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    /// A public key was supplied where a private key is needed, or vice versa
    #[error("Wrong key kind: expected {expected}, got {actual}")]
    WrongKeyKind {
        /// Kind the caller asked for
        expected: String,
        /// Kind found in the PEM label
        actual: String,
    },

    /// Internal error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KeyError {
    /// Create an `invalid_pem` error
    #[must_use]
    pub fn invalid_pem(msg: impl Into<String>) -> Self {
        Self::InvalidPem(msg.into())
    }

    /// Create an `invalid_key_format` error
    #[must_use]
    pub fn invalid_key_format(msg: impl Into<String>) -> Self {
        Self::InvalidKeyFormat(msg.into())
    }
}

impl Classify for KeyError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::KeyGeneration(_) => ErrorKind::Environment,
            Self::InvalidPem(_)
            | Self::InvalidKeyFormat(_)
            | Self::UnsupportedCurve(_)
            | Self::WrongKeyKind { .. } => ErrorKind::UserInput,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
