//! xxHash builder

use crate::fast::{self, FastDigest, XxhashVariant};
use crate::{HashResult, Result};

/// xxHash builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XxhashBuilder {
    variant: XxhashVariant,
    seed: u64,
}

impl XxhashBuilder {
    /// Builder for `variant` with seed 0
    #[must_use]
    pub fn new(variant: XxhashVariant) -> Self {
        Self { variant, seed: 0 }
    }

    /// Key the hash with `seed`
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Hash `data` on the current thread
    ///
    /// # Errors
    ///
    /// Returns [`crate::HashError::InvalidParameters`] for an XXH32 seed wider
    /// than 32 bits.
    pub fn compute(self, data: impl AsRef<[u8]>) -> Result<HashResult<FastDigest>> {
        HashResult::measure(|| fast::digest(self.variant, self.seed, data.as_ref()))
    }
}
