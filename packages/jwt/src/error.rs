//! JWT error types

use hashlab_common::{Classify, ErrorKind};
use hashlab_key::KeyError;
use std::fmt;
use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JwtError {
    /// Token does not decode
    InvalidToken(String),
    /// Token is not three dot-separated segments
    InvalidFormat,
    /// Signature does not match
    InvalidSignature,
    /// Token has expired
    TokenExpired,
    /// Token not yet valid
    TokenNotYetValid,
    /// Missing required claim
    MissingClaim(String),
    /// Issuer not in the accepted set
    InvalidIssuer,
    /// No audience in the accepted set
    InvalidAudience,
    /// Key unusable for the requested algorithm
    InvalidKey(String),
    /// Algorithm name known but not implemented here
    UnsupportedAlgorithm(String),
    /// Algorithm valid but outside the policy's allow-list
    AlgorithmNotAllowed(String),
    /// Serialization failed
    Serialization(String),
    /// Signing failed inside the primitive
    SigningError(String),
    /// A claim has the wrong shape
    InvalidClaims(String),
    /// Background task failed
    TaskFailed,
    /// Internal error
    Internal(String),
}

impl fmt::Display for JwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JwtError::InvalidToken(msg) => write!(f, "Invalid JWT token: {msg}"),
            JwtError::InvalidFormat => write!(f, "Invalid format: expected header.payload.signature"),
            JwtError::InvalidSignature => write!(f, "Invalid JWT signature"),
            JwtError::TokenExpired => write!(f, "JWT token has expired"),
            JwtError::TokenNotYetValid => write!(f, "JWT token not yet valid"),
            JwtError::MissingClaim(claim) => write!(f, "Missing required claim: {claim}"),
            JwtError::InvalidIssuer => write!(f, "Invalid JWT issuer"),
            JwtError::InvalidAudience => write!(f, "Invalid JWT audience"),
            JwtError::InvalidKey(msg) => write!(f, "Invalid key: {msg}"),
            JwtError::UnsupportedAlgorithm(alg) => write!(f, "Unsupported algorithm: {alg}"),
            JwtError::AlgorithmNotAllowed(alg) => write!(f, "Algorithm not allowed: {alg}"),
            JwtError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            JwtError::SigningError(msg) => write!(f, "Signing error: {msg}"),
            JwtError::InvalidClaims(msg) => write!(f, "Invalid claims: {msg}"),
            JwtError::TaskFailed => write!(f, "Background task failed"),
            JwtError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for JwtError {}

impl JwtError {
    /// Create an invalid token error
    #[inline]
    #[must_use]
    pub fn invalid_token(msg: &str) -> Self {
        JwtError::InvalidToken(msg.to_string())
    }

    /// Create a missing claim error
    #[inline]
    #[must_use]
    pub fn missing_claim(claim: &str) -> Self {
        JwtError::MissingClaim(claim.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// Create an invalid claims error
    #[inline]
    #[must_use]
    pub fn invalid_claims(msg: &str) -> Self {
        JwtError::InvalidClaims(msg.to_string())
    }
}

impl From<KeyError> for JwtError {
    fn from(err: KeyError) -> Self {
        JwtError::InvalidKey(err.to_string())
    }
}

impl Classify for JwtError {
    fn kind(&self) -> ErrorKind {
        match self {
            JwtError::InvalidToken(_) | JwtError::InvalidFormat => ErrorKind::UserInput,
            JwtError::TaskFailed | JwtError::Internal(_) => ErrorKind::Internal,
            _ => ErrorKind::Operation,
        }
    }
}

/// Why edited claims or header text was rejected
///
/// The editor keeps its last valid state when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimsParseError {
    /// Text is not valid JSON, or does not fit the header shape
    #[error("line {line}, column {column}: {message}")]
    Invalid {
        /// 1-based line of the problem
        line: usize,
        /// 1-based column of the problem
        column: usize,
        /// What the parser expected
        message: String,
    },

    /// Valid JSON, but claims must be an object
    #[error("claims must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

impl From<serde_json::Error> for ClaimsParseError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        // serde_json appends " at line L column C"; the fields carry that already
        let message = match message.rfind(" at line ") {
            Some(idx) => message[..idx].to_string(),
            None => message,
        };
        ClaimsParseError::Invalid {
            line: err.line(),
            column: err.column(),
            message,
        }
    }
}

impl Classify for ClaimsParseError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::UserInput
    }
}
