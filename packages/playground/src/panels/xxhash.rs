//! xxHash panel

use hashlab_common::{FailureMode, LoggingTransformer};
use hashlab_hashing::{FastDigest, Hash, HashError, HashResult, XxhashVariant};

/// State of the fast-hash panel
#[derive(Debug)]
pub struct XxhashPanel {
    /// Text to hash
    pub input: String,
    /// Seed as typed; empty means 0, `0x` prefix means hex
    pub seed: String,
    variant: XxhashVariant,
    output: Option<HashResult<FastDigest>>,
    last_error: Option<HashError>,
}

impl XxhashPanel {
    /// Empty panel starting on `variant` with `seed`
    #[must_use]
    pub fn new(variant: XxhashVariant, seed: u64) -> Self {
        Self {
            input: String::new(),
            seed: if seed == 0 {
                String::new()
            } else {
                seed.to_string()
            },
            variant,
            output: None,
            last_error: None,
        }
    }

    /// Selected variant
    #[must_use]
    pub fn variant(&self) -> XxhashVariant {
        self.variant
    }

    /// Last digest and its timing
    #[must_use]
    pub fn output(&self) -> Option<&HashResult<FastDigest>> {
        self.output.as_ref()
    }

    /// Why the last computation failed
    #[must_use]
    pub fn last_error(&self) -> Option<&HashError> {
        self.last_error.as_ref()
    }

    /// Switch to the next variant; recompute if something was shown
    pub fn cycle_variant(&mut self, failure_mode: FailureMode) {
        let all = XxhashVariant::ALL;
        let at = all.iter().position(|v| *v == self.variant).unwrap_or(0);
        self.variant = all[(at + 1) % all.len()];
        if self.output.is_some() || self.last_error.is_some() {
            self.compute(failure_mode);
        }
    }

    /// Parse the seed field
    ///
    /// # Errors
    ///
    /// [`HashError::InvalidParameters`] if it is not a decimal or `0x` hex `u64`.
    pub fn parsed_seed(&self) -> hashlab_hashing::Result<u64> {
        let seed = self.seed.trim();
        let parsed = if seed.is_empty() {
            Ok(0)
        } else if let Some(hex) = seed.strip_prefix("0x").or_else(|| seed.strip_prefix("0X")) {
            u64::from_str_radix(hex, 16)
        } else {
            seed.parse()
        };
        parsed.map_err(|_| HashError::invalid_parameters("seed must be a 64-bit unsigned number"))
    }

    /// Hash the input with the selected variant and seed
    pub fn compute(&mut self, failure_mode: FailureMode) {
        let result = self
            .parsed_seed()
            .and_then(|seed| Hash::xxhash(self.variant).with_seed(seed).compute(&self.input));
        match result {
            Ok(digest) => {
                self.last_error = None;
                self.output = Some(digest);
            }
            Err(e) => {
                LoggingTransformer::log_operation_error(self.variant.as_str(), &e);
                failure_mode.on_failure(&mut self.output);
                self.last_error = Some(e);
            }
        }
    }
}
