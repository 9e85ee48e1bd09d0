//! Supported elliptic curves

use crate::{KeyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NIST curve a key pair lives on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    /// P-256 (secp256r1), used with ES256
    #[default]
    P256,
    /// P-384 (secp384r1), used with ES384
    P384,
}

impl Curve {
    /// JWS algorithm name that signs with this curve
    #[must_use]
    pub fn jws_algorithm(self) -> &'static str {
        match self {
            Self::P256 => "ES256",
            Self::P384 => "ES384",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P256 => write!(f, "P-256"),
            Self::P384 => write!(f, "P-384"),
        }
    }
}

impl FromStr for Curve {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "p256" | "secp256r1" | "prime256v1" => Ok(Self::P256),
            "p384" | "secp384r1" => Ok(Self::P384),
            _ => Err(KeyError::UnsupportedCurve(s.to_string())),
        }
    }
}
