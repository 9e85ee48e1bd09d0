//! Error constructors and methods

use super::types::{Classify, Error, ErrorInner, ErrorKind};
use std::fmt;
use std::sync::Arc;

impl Error {
    /// Create a new error with the given kind
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self::build(kind, None, None)
    }

    /// Create an error with a source error
    #[must_use]
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::build(kind, None, Some(Box::new(source)))
    }

    /// Wrap a crate error, taking the kind from its classification
    #[must_use]
    pub fn classified<E>(source: E) -> Self
    where
        E: Classify + std::error::Error + Send + Sync + 'static,
    {
        let kind = source.kind();
        Self::with_source(kind, source)
    }

    /// Add context to this error
    #[must_use]
    pub fn context<C: fmt::Display>(self, context: C) -> Self {
        let kind = self.inner.kind;
        match Arc::try_unwrap(self.inner) {
            // Sole owner without context yet: fill it in place
            Ok(mut inner) if inner.context.is_none() => {
                inner.context = Some(context.to_string());
                Self {
                    inner: Arc::new(inner),
                }
            }
            Ok(inner) => {
                let previous = Self {
                    inner: Arc::new(inner),
                };
                Self::build(kind, Some(context.to_string()), Some(Box::new(previous)))
            }
            Err(shared) => {
                let previous = Self { inner: shared };
                Self::build(kind, Some(context.to_string()), Some(Box::new(previous)))
            }
        }
    }

    /// Get the error kind
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.inner.kind
    }

    /// Get the error context if any
    #[must_use]
    pub fn get_context(&self) -> Option<&str> {
        self.inner.context.as_deref()
    }

    /// Get the backtrace
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> &backtrace::Backtrace {
        &self.inner.backtrace
    }

    /// Create a user input error
    #[must_use]
    pub fn user_input() -> Self {
        Self::new(ErrorKind::UserInput)
    }

    /// Create an operation error
    #[must_use]
    pub fn operation() -> Self {
        Self::new(ErrorKind::Operation)
    }

    /// Create an environment error
    #[must_use]
    pub fn environment() -> Self {
        Self::new(ErrorKind::Environment)
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal)
    }

    fn build(
        kind: ErrorKind,
        context: Option<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context,
                source,
                #[cfg(feature = "full-backtrace")]
                backtrace: backtrace::Backtrace::new(),
            }),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Environment, err)
    }
}
