//! # hashlab key provisioning
//!
//! Generates ECDSA key pairs for token signing and moves them in and out of
//! PEM text.
//!
//! ```rust
//! use hashlab_key::{KeyProvisioner, pem};
//!
//! let pair = KeyProvisioner::global().key_pair()?;
//! let (kind, der) = pem::decode(pair.public_key())?;
//! assert_eq!(kind, pem::KeyKind::Public);
//! assert!(!der.is_empty());
//! # Ok::<(), hashlab_key::KeyError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod curve;
pub mod error;
pub mod key_id;
pub mod key_pair;
pub mod material;
pub mod pem;
pub mod provisioner;

pub use curve::Curve;
pub use error::{KeyError, Result};
pub use key_pair::KeyPair;
pub use material::{SigningMaterial, VerifyingMaterial};
pub use provisioner::KeyProvisioner;
