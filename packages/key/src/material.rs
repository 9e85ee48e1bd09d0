//! Typed signing and verifying keys decoded from PEM text

use crate::pem::{self, KeyKind};
use crate::{Curve, KeyError, Result};
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey};

/// Private key ready for ECDSA signing
#[derive(Clone)]
pub enum SigningMaterial {
    /// P-256 signing key
    P256(p256::ecdsa::SigningKey),
    /// P-384 signing key
    P384(p384::ecdsa::SigningKey),
}

/// Public key ready for ECDSA verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyingMaterial {
    /// P-256 verifying key
    P256(p256::ecdsa::VerifyingKey),
    /// P-384 verifying key
    P384(p384::ecdsa::VerifyingKey),
}

impl SigningMaterial {
    /// Decode a `PRIVATE KEY` PEM block holding PKCS#8 DER
    ///
    /// # Errors
    ///
    /// Returns an error for bad framing, a public key, or DER that is not a
    /// P-256 or P-384 private key.
    pub fn from_pem(text: &str) -> Result<Self> {
        pem::expect_kind(text, KeyKind::Private)?;
        let text = text.trim();
        if let Ok(key) = p256::ecdsa::SigningKey::from_pkcs8_pem(text) {
            return Ok(Self::P256(key));
        }
        p384::ecdsa::SigningKey::from_pkcs8_pem(text)
            .map(Self::P384)
            .map_err(|e| KeyError::invalid_key_format(format!("not a P-256/P-384 PKCS#8 key: {e}")))
    }

    /// Curve of this key
    #[must_use]
    pub fn curve(&self) -> Curve {
        match self {
            Self::P256(_) => Curve::P256,
            Self::P384(_) => Curve::P384,
        }
    }

    /// Matching public key
    #[must_use]
    pub fn verifying(&self) -> VerifyingMaterial {
        match self {
            Self::P256(key) => VerifyingMaterial::P256(key.verifying_key().clone()),
            Self::P384(key) => VerifyingMaterial::P384(key.verifying_key().clone()),
        }
    }
}

impl std::fmt::Debug for SigningMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SigningMaterial")
            .field(&self.curve())
            .finish_non_exhaustive()
    }
}

impl VerifyingMaterial {
    /// Decode a `PUBLIC KEY` PEM block holding SPKI DER
    ///
    /// # Errors
    ///
    /// Returns an error for bad framing, a private key, or DER that is not a
    /// P-256 or P-384 public key.
    pub fn from_pem(text: &str) -> Result<Self> {
        pem::expect_kind(text, KeyKind::Public)?;
        let text = text.trim();
        if let Ok(key) = p256::ecdsa::VerifyingKey::from_public_key_pem(text) {
            return Ok(Self::P256(key));
        }
        p384::ecdsa::VerifyingKey::from_public_key_pem(text)
            .map(Self::P384)
            .map_err(|e| KeyError::invalid_key_format(format!("not a P-256/P-384 SPKI key: {e}")))
    }

    /// Curve of this key
    #[must_use]
    pub fn curve(&self) -> Curve {
        match self {
            Self::P256(_) => Curve::P256,
            Self::P384(_) => Curve::P384,
        }
    }
}
