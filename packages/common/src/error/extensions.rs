//! Context helpers for `Result` and `Option`

use super::types::{Error, ErrorKind};
use std::fmt;

/// Attach a kind and context while converting a foreign error
pub trait ResultExt<T> {
    /// Convert the error into [`Error`] of `kind` with `context`
    fn context<C: fmt::Display>(self, kind: ErrorKind, context: C) -> Result<T, Error>;

    /// Like [`ResultExt::context`], building the context lazily
    fn with_context<C, F>(self, kind: ErrorKind, f: F) -> Result<T, Error>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C: fmt::Display>(self, kind: ErrorKind, context: C) -> Result<T, Error> {
        self.map_err(|e| Error::with_source(kind, e).context(context))
    }

    fn with_context<C, F>(self, kind: ErrorKind, f: F) -> Result<T, Error>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::with_source(kind, e).context(f()))
    }
}

/// Turn a missing value into an [`Error`]
pub trait OptionExt<T> {
    /// `None` becomes an error of `kind` with `context`
    fn ok_or_context<C: fmt::Display>(self, kind: ErrorKind, context: C) -> Result<T, Error>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_context<C: fmt::Display>(self, kind: ErrorKind, context: C) -> Result<T, Error> {
        self.ok_or_else(|| Error::new(kind).context(context))
    }
}
