//! Password and fast hashing for the hashlab playground
//!
//! Two families live here:
//! - [`password`]: Argon2 and bcrypt, normalised to `verify(password, hash)`
//! - [`fast`]: the xxHash family (XXH32, XXH64, XXH3-64, XXH3-128)
//!
//! The [`Hash`] entry point wraps both in builders that time each call.

#![forbid(unsafe_code)]

pub mod api;
pub mod async_result;
pub mod error;
pub mod fast;
pub mod hash_result;
pub mod password;

pub use api::{Argon2Builder, BcryptBuilder, Hash, XxhashBuilder};
pub use async_result::AsyncHashResult;
pub use error::{HashError, Result};
pub use fast::{FastDigest, XxhashVariant};
pub use hash_result::HashResult;
pub use password::{
    Argon2Params, Argon2Scheme, Argon2Variant, BcryptScheme, PasswordScheme, Verification,
};
