use super::{PasswordScheme, Verification};
use crate::{HashError, Result};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Argon2 flavour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Argon2Variant {
    /// Data-dependent memory access
    Argon2d,
    /// Data-independent memory access
    Argon2i,
    /// Hybrid of the two
    #[default]
    Argon2id,
}

impl Argon2Variant {
    /// All variants in display order
    pub const ALL: [Self; 3] = [Self::Argon2d, Self::Argon2i, Self::Argon2id];

    fn algorithm(self) -> Algorithm {
        match self {
            Self::Argon2d => Algorithm::Argon2d,
            Self::Argon2i => Algorithm::Argon2i,
            Self::Argon2id => Algorithm::Argon2id,
        }
    }
}

impl fmt::Display for Argon2Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argon2d => write!(f, "Argon2d"),
            Self::Argon2i => write!(f, "Argon2i"),
            Self::Argon2id => write!(f, "Argon2id"),
        }
    }
}

impl FromStr for Argon2Variant {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "argon2d" | "d" => Ok(Self::Argon2d),
            "argon2i" | "i" => Ok(Self::Argon2i),
            "argon2id" | "id" => Ok(Self::Argon2id),
            other => Err(HashError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Cost parameters for one Argon2 hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2Params {
    /// Which Argon2 flavour to run
    pub variant: Argon2Variant,
    /// Memory size in KiB
    pub memory_cost: u32,
    /// Number of passes
    pub time_cost: u32,
    /// Degree of parallelism
    pub parallelism: u32,
    /// Raw hash length in bytes
    pub output_len: usize,
}

impl Argon2Params {
    /// Default number of passes
    pub const DEFAULT_TIME_COST: u32 = 3;
    /// Default degree of parallelism
    pub const DEFAULT_PARALLELISM: u32 = 1;
    /// Default memory size in KiB
    pub const DEFAULT_MEMORY_COST: u32 = 4096;
    /// Default raw hash length
    pub const DEFAULT_OUTPUT_LEN: usize = 32;
    /// Time cost range offered by the playground controls
    pub const TIME_COST_RANGE: RangeInclusive<u32> = 1..=10;
    /// Parallelism range offered by the playground controls
    pub const PARALLELISM_RANGE: RangeInclusive<u32> = 1..=255;

    /// The cheapest parameters the primitive accepts, for tests and demos
    #[must_use]
    pub fn minimum() -> Self {
        Self {
            memory_cost: Params::MIN_M_COST,
            time_cost: Params::MIN_T_COST,
            parallelism: Params::MIN_P_COST,
            ..Self::default()
        }
    }

    fn context(&self) -> Result<Argon2<'static>> {
        let params = Params::new(
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            Some(self.output_len),
        )
        .map_err(|e| HashError::invalid_parameters(e.to_string()))?;
        Ok(Argon2::new(self.variant.algorithm(), Version::V0x13, params))
    }
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            variant: Argon2Variant::default(),
            memory_cost: Self::DEFAULT_MEMORY_COST,
            time_cost: Self::DEFAULT_TIME_COST,
            parallelism: Self::DEFAULT_PARALLELISM,
            output_len: Self::DEFAULT_OUTPUT_LEN,
        }
    }
}

/// Argon2 password hashing producing PHC strings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Argon2Scheme {
    params: Argon2Params,
}

impl Argon2Scheme {
    /// Scheme with the given cost parameters
    #[must_use]
    pub fn new(params: Argon2Params) -> Self {
        Self { params }
    }

    /// The configured cost parameters
    #[must_use]
    pub fn params(&self) -> &Argon2Params {
        &self.params
    }
}

impl PasswordScheme for Argon2Scheme {
    fn name(&self) -> &'static str {
        "argon2"
    }

    fn hash(&self, password: &str) -> Result<String> {
        let argon2 = self.params.context()?;
        let salt = SaltString::generate(&mut OsRng);
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError::HashComputation(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<Verification> {
        let parsed = PasswordHash::new(hash).map_err(|e| HashError::malformed_hash(e.to_string()))?;
        // A PHC string without salt or output parses, but can never match
        if parsed.salt.is_none() || parsed.hash.is_none() {
            return Err(HashError::malformed_hash("PHC string is missing its salt or hash"));
        }

        // Variant and cost come from the PHC string, not from self.params
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(Verification::Verified),
            Err(password_hash::Error::Password) => Ok(Verification::NotVerified),
            Err(e) => Err(HashError::malformed_hash(e.to_string())),
        }
    }
}
