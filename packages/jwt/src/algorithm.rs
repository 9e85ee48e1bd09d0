//! JWS algorithm names

use crate::error::{JwtError, JwtResult};
use hashlab_key::Curve;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A JWS `alg` value
///
/// Every registered name parses so the editor can offer it; only the ECDSA
/// ones can actually sign here.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,
    /// RSASSA-PSS with SHA-256
    PS256,
    /// RSASSA-PSS with SHA-384
    PS384,
    /// RSASSA-PSS with SHA-512
    PS512,
    /// ECDSA P-256 with SHA-256
    #[default]
    ES256,
    /// ECDSA P-384 with SHA-384
    ES384,
    /// Ed25519
    EdDSA,
}

impl Algorithm {
    /// All names in editor order
    pub const ALL: [Algorithm; 12] = [
        Algorithm::ES256,
        Algorithm::ES384,
        Algorithm::HS256,
        Algorithm::HS384,
        Algorithm::HS512,
        Algorithm::RS256,
        Algorithm::RS384,
        Algorithm::RS512,
        Algorithm::PS256,
        Algorithm::PS384,
        Algorithm::PS512,
        Algorithm::EdDSA,
    ];

    /// The `alg` string
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
            Algorithm::RS256 => "RS256",
            Algorithm::RS384 => "RS384",
            Algorithm::RS512 => "RS512",
            Algorithm::PS256 => "PS256",
            Algorithm::PS384 => "PS384",
            Algorithm::PS512 => "PS512",
            Algorithm::ES256 => "ES256",
            Algorithm::ES384 => "ES384",
            Algorithm::EdDSA => "EdDSA",
        }
    }

    /// Curve required by this algorithm, if it is one we can sign with
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::UnsupportedAlgorithm`] for non-ECDSA algorithms.
    pub fn curve(self) -> JwtResult<Curve> {
        match self {
            Algorithm::ES256 => Ok(Curve::P256),
            Algorithm::ES384 => Ok(Curve::P384),
            other => Err(JwtError::UnsupportedAlgorithm(other.to_string())),
        }
    }

    /// Whether tokens can be issued and verified with this algorithm
    #[must_use]
    pub fn is_supported(self) -> bool {
        self.curve().is_ok()
    }

    /// The next name in [`Algorithm::ALL`], wrapping around
    #[must_use]
    pub fn cycle(self) -> Self {
        let idx = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> JwtResult<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| JwtError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl From<Curve> for Algorithm {
    fn from(curve: Curve) -> Self {
        match curve {
            Curve::P256 => Algorithm::ES256,
            Curve::P384 => Algorithm::ES384,
        }
    }
}
