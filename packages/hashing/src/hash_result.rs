//! Timed outcome of a hash operation

use std::fmt;
use std::time::{Duration, Instant};

/// A hash output together with how long the primitive took to produce it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult<T = String> {
    value: T,
    elapsed: Duration,
}

impl<T> HashResult<T> {
    /// Wrap a value with its measured duration
    #[must_use]
    pub fn new(value: T, elapsed: Duration) -> Self {
        Self { value, elapsed }
    }

    /// Run `op` and record its wall-clock duration
    pub(crate) fn measure<E>(op: impl FnOnce() -> Result<T, E>) -> Result<Self, E> {
        let started = Instant::now();
        let value = op()?;
        Ok(Self::new(value, started.elapsed()))
    }

    /// The hash output
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume and return the hash output
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Time spent inside the primitive
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in whole milliseconds, as shown next to results
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

impl<T: fmt::Display> fmt::Display for HashResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
