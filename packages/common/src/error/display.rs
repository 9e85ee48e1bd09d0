//! Display and trait implementations for Error

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.kind)?;

        if let Some(context) = &self.inner.context {
            write!(f, ": {context}")?;
        }

        if let Some(source) = &self.inner.source {
            write!(f, "\nCaused by: {source}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl Error {
    /// One-line message suitable for a toast or status bar.
    ///
    /// Uses the innermost source's message when there is one, since that is
    /// what the primitive actually reported.
    #[must_use]
    pub fn user_message(&self) -> String {
        let Some(mut current) = std::error::Error::source(self) else {
            return match &self.inner.context {
                Some(context) => format!("{}: {context}", self.inner.kind),
                None => self.inner.kind.to_string(),
            };
        };
        while let Some(next) = current.source() {
            current = next;
        }
        current.to_string()
    }
}
