//! xxHash family digests
//!
//! Non-cryptographic, pure and deterministic: the same input, variant and
//! seed always produce the same digest.

mod stream;

pub use stream::Xxh3Stream;

use crate::{HashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use twox_hash::{XxHash3_64, XxHash3_128, XxHash32, XxHash64};

/// Which xxHash function to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XxhashVariant {
    /// Classic 32-bit XXH32
    Xxh32,
    /// Classic 64-bit XXH64
    Xxh64,
    /// XXH3 64-bit through the streaming hasher
    #[default]
    Xxh3,
    /// XXH3 64-bit one-shot
    Xxh3Xxh64,
    /// XXH3 128-bit one-shot
    Xxh3Xxh128,
}

impl XxhashVariant {
    /// All variants in display order
    pub const ALL: [Self; 5] = [
        Self::Xxh32,
        Self::Xxh64,
        Self::Xxh3,
        Self::Xxh3Xxh64,
        Self::Xxh3Xxh128,
    ];

    /// Digest width in bits
    #[must_use]
    pub fn bit_width(self) -> u32 {
        match self {
            Self::Xxh32 => 32,
            Self::Xxh64 | Self::Xxh3 | Self::Xxh3Xxh64 => 64,
            Self::Xxh3Xxh128 => 128,
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xxh32 => "xxh32",
            Self::Xxh64 => "xxh64",
            Self::Xxh3 => "xxh3",
            Self::Xxh3Xxh64 => "xxh3-xxh64",
            Self::Xxh3Xxh128 => "xxh3-xxh128",
        }
    }
}

impl fmt::Display for XxhashVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for XxhashVariant {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == lowered)
            .ok_or(HashError::UnsupportedAlgorithm(lowered))
    }
}

/// A digest of the width its variant produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FastDigest {
    /// 32-bit digest
    U32(u32),
    /// 64-bit digest
    U64(u64),
    /// 128-bit digest
    U128(u128),
}

impl FastDigest {
    /// Digest width in bits
    #[must_use]
    pub fn bit_width(&self) -> u32 {
        match self {
            Self::U32(_) => 32,
            Self::U64(_) => 64,
            Self::U128(_) => 128,
        }
    }

    /// Lowercase hex, zero-padded to the full width
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Big-endian bytes of the digest
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::U32(v) => v.to_be_bytes().to_vec(),
            Self::U64(v) => v.to_be_bytes().to_vec(),
            Self::U128(v) => v.to_be_bytes().to_vec(),
        }
    }
}

impl fmt::Display for FastDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hash `input` with `variant` and `seed`
///
/// # Errors
///
/// Returns [`HashError::InvalidParameters`] when `variant` is XXH32 and the
/// seed does not fit in 32 bits.
pub fn digest(variant: XxhashVariant, seed: u64, input: &[u8]) -> Result<FastDigest> {
    let digest = match variant {
        XxhashVariant::Xxh32 => {
            let seed = u32::try_from(seed).map_err(|_| {
                HashError::invalid_parameters(format!("xxh32 seed {seed} does not fit in 32 bits"))
            })?;
            FastDigest::U32(XxHash32::oneshot(seed, input))
        }
        XxhashVariant::Xxh64 => FastDigest::U64(XxHash64::oneshot(seed, input)),
        XxhashVariant::Xxh3 => {
            let mut stream = Xxh3Stream::with_seed(seed);
            stream.update(input);
            FastDigest::U64(stream.digest())
        }
        XxhashVariant::Xxh3Xxh64 => FastDigest::U64(XxHash3_64::oneshot_with_seed(seed, input)),
        XxhashVariant::Xxh3Xxh128 => FastDigest::U128(XxHash3_128::oneshot_with_seed(seed, input)),
    };
    tracing::trace!(variant = %variant, len = input.len(), "computed xxhash digest");
    Ok(digest)
}
