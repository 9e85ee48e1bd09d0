use super::{PasswordScheme, Verification};
use crate::{HashError, Result};
use bcrypt::BcryptError;
use std::ops::RangeInclusive;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// bcrypt password hashing producing `$2b$` modular-crypt strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptScheme {
    cost: u32,
}

impl BcryptScheme {
    /// Work factor range offered by the playground controls
    pub const COST_RANGE: RangeInclusive<u32> = 4..=31;

    /// Scheme with the given work factor
    #[must_use]
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// The configured work factor
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptScheme {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordScheme for BcryptScheme {
    fn name(&self) -> &'static str {
        "bcrypt"
    }

    fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost).map_err(|e| match e {
            BcryptError::CostNotAllowed(cost) => {
                HashError::invalid_parameters(format!("bcrypt cost {cost} is outside 4..=31"))
            }
            other => HashError::HashComputation(other.to_string()),
        })
    }

    fn verify(&self, password: &str, hash: &str) -> Result<Verification> {
        bcrypt::verify(password, hash)
            .map(Verification::from)
            .map_err(|e| HashError::malformed_hash(e.to_string()))
    }
}
