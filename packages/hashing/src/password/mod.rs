//! Password hashing schemes behind one verify contract
//!
//! The underlying crates disagree on argument order and on how a wrong
//! password is reported. Every scheme here takes `(password, hash)` and
//! answers `Ok(Verification::NotVerified)` for a mismatch, reserving `Err`
//! for hashes that cannot be checked at all.

mod argon2_scheme;
mod bcrypt_scheme;

pub use argon2_scheme::{Argon2Params, Argon2Scheme, Argon2Variant};
pub use bcrypt_scheme::{BcryptScheme, DEFAULT_BCRYPT_COST};

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking a password against a stored hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verification {
    /// The password produced the stored hash
    Verified,
    /// The hash is well-formed but belongs to a different password
    NotVerified,
}

impl Verification {
    /// `true` for [`Verification::Verified`]
    #[must_use]
    pub fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl From<bool> for Verification {
    fn from(matched: bool) -> Self {
        if matched {
            Self::Verified
        } else {
            Self::NotVerified
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verified => write!(f, "verified"),
            Self::NotVerified => write!(f, "not verified"),
        }
    }
}

/// A password hashing scheme with fixed cost parameters
pub trait PasswordScheme: Send + Sync {
    /// Human-readable scheme name for logs and labels
    fn name(&self) -> &'static str;

    /// Hash `password` with a fresh random salt, returning the encoded hash
    ///
    /// # Errors
    ///
    /// Returns [`crate::HashError::InvalidParameters`] when the primitive
    /// rejects the cost parameters.
    fn hash(&self, password: &str) -> Result<String>;

    /// Check `password` against an encoded `hash`
    ///
    /// # Errors
    ///
    /// Returns [`crate::HashError::MalformedHash`] when `hash` cannot be parsed.
    fn verify(&self, password: &str, hash: &str) -> Result<Verification>;
}
