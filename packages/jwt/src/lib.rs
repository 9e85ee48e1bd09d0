//! ES256 token issuing and verification for the playground
//!
//! - [`issue`] signs claims under a header with a PKCS#8 PEM private key
//! - [`verify`] checks a compact token against an SPKI PEM public key and a
//!   [`VerificationPolicy`]
//! - [`ClaimsEditor`] turns edited JSON text into claims and headers
//! - [`TokenSession`] ties these together for the token panel, discarding
//!   results of superseded cycles
//!
//! ```no_run
//! use hashlab_jwt::{Claims, Header, VerificationPolicy, issue, verify};
//! use hashlab_key::KeyProvisioner;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let keys = KeyProvisioner::global().key_pair()?;
//! let claims = Claims::demo(chrono::Utc::now().timestamp());
//! let token = issue(&claims, &Header::default(), keys.private_key())?;
//! let verified = verify(&token, keys.public_key(), &VerificationPolicy::default())?;
//! assert_eq!(verified, claims);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod algorithm;
mod async_result;
pub mod claims;
mod editor;
mod error;
mod issuer;
mod policy;
mod session;
mod types;
mod verifier;

pub use algorithm::Algorithm;
pub use async_result::AsyncJwtResult;
pub use claims::ClaimsBuilder;
pub use editor::{ClaimsEditor, Document};
pub use error::{ClaimsParseError, JwtError, JwtResult};
pub use issuer::issue;
pub use policy::{REQUIRED_SPEC_CLAIMS, VerificationPolicy};
pub use session::{CycleOutcome, TokenCycle, TokenSession, VerificationStatus};
pub use types::{Claims, DEMO_AUDIENCE, DEMO_ISSUER, Header, JoseHeader, ONE_WEEK_SECS};
pub use verifier::{decode_unverified, verify};
