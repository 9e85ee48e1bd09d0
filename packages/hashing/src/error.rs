//! Error handling for password and fast hashing

use hashlab_common::{Classify, ErrorKind};
use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// A cost parameter was rejected by the primitive
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The stored hash could not be parsed or names an unknown scheme
    #[error("Malformed hash: {0}")]
    MalformedHash(String),

    /// The primitive failed while computing a hash
    #[error("Hash computation error: {0}")]
    HashComputation(String),

    /// A password is required and none was given
    #[error("Password must not be empty")]
    EmptyPassword,

    /// An unknown variant name
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The blocking worker went away before answering
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an `invalid_parameters` error
    #[must_use]
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Create a `malformed_hash` error
    #[must_use]
    pub fn malformed_hash(msg: impl Into<String>) -> Self {
        Self::MalformedHash(msg.into())
    }
}

impl Classify for HashError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyPassword | Self::UnsupportedAlgorithm(_) => ErrorKind::UserInput,
            Self::InvalidParameters(_) | Self::MalformedHash(_) | Self::HashComputation(_) => {
                ErrorKind::Operation
            }
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
