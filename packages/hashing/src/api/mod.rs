//! Fluent hashing API
//!
//! Usage: `Hash::bcrypt().cost(10).hash(password).await`

pub mod hash_entry;
pub mod password_builder;
pub mod xxhash_builder;

pub use hash_entry::Hash;
pub use password_builder::{Argon2Builder, BcryptBuilder};
pub use xxhash_builder::XxhashBuilder;
