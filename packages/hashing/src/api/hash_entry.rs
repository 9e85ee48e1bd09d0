//! Entry point for the fluent hashing API

use super::password_builder::{Argon2Builder, BcryptBuilder};
use super::xxhash_builder::XxhashBuilder;
use crate::fast::XxhashVariant;

/// Entry point for hash operations
///
/// ```no_run
/// # async fn demo() -> hashlab_hashing::Result<()> {
/// use hashlab_hashing::Hash;
///
/// let hashed = Hash::argon2().time_cost(2).hash("hunter2").await?;
/// let outcome = Hash::argon2().verify("hunter2", hashed.value()).await?;
/// assert!(outcome.value().is_verified());
/// # Ok(())
/// # }
/// ```
pub struct Hash;

impl Hash {
    /// Argon2 password hashing with default cost
    #[must_use]
    pub fn argon2() -> Argon2Builder {
        Argon2Builder::new()
    }

    /// bcrypt password hashing with default cost
    #[must_use]
    pub fn bcrypt() -> BcryptBuilder {
        BcryptBuilder::new()
    }

    /// xxHash digest with the given variant and seed 0
    #[must_use]
    pub fn xxhash(variant: XxhashVariant) -> XxhashBuilder {
        XxhashBuilder::new(variant)
    }

    /// XXH32
    #[must_use]
    pub fn xxh32() -> XxhashBuilder {
        XxhashBuilder::new(XxhashVariant::Xxh32)
    }

    /// XXH64
    #[must_use]
    pub fn xxh64() -> XxhashBuilder {
        XxhashBuilder::new(XxhashVariant::Xxh64)
    }

    /// XXH3 64-bit
    #[must_use]
    pub fn xxh3() -> XxhashBuilder {
        XxhashBuilder::new(XxhashVariant::Xxh3)
    }
}
