//! Core error types and definitions

use std::sync::Arc;
use thiserror::Error;

/// Core error type with context propagation support
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    pub kind: ErrorKind,
    pub context: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

/// Where a failure originated, from the user's point of view.
///
/// Panels decide how loudly to report a failure from its kind alone:
/// user input and operation failures are expected and recoverable,
/// environment failures are logged, internal failures are bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Malformed structured text or a missing required field
    #[error("Invalid input")]
    UserInput,

    /// A primitive rejected the request (malformed hash, bad cost, bad signature)
    #[error("Operation failed")]
    Operation,

    /// Clipboard, terminal or randomness unavailable
    #[error("Environment error")]
    Environment,

    /// Configuration file unreadable or invalid
    #[error("Configuration error")]
    Configuration,

    /// A background task vanished or an invariant broke
    #[error("Internal error")]
    Internal,
}

/// Maps a crate-specific error onto the shared taxonomy.
pub trait Classify {
    /// The taxonomy bucket this error belongs to
    fn kind(&self) -> ErrorKind;
}

impl Classify for Error {
    fn kind(&self) -> ErrorKind {
        self.inner.kind
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
