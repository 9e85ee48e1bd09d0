//! Compact token issuance
//!
//! The whole token is rebuilt on every call; nothing is cached between
//! issues.

use crate::error::{JwtError, JwtResult};
use crate::types::{Claims, Header};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hashlab_key::SigningMaterial;
use p256::ecdsa::signature::Signer;

/// Sign `claims` under `header` with a PEM-encoded PKCS#8 private key
///
/// The signature is the fixed-width `r || s` form JWS expects.
///
/// # Errors
///
/// - [`JwtError::UnsupportedAlgorithm`] for non-ECDSA algorithms
/// - [`JwtError::InvalidKey`] for an unreadable key or one on the wrong curve
/// - [`JwtError::SigningError`] if the primitive refuses to sign
pub fn issue(claims: &Claims, header: &Header, private_key_pem: &str) -> JwtResult<String> {
    let curve = header.algorithm.curve()?;
    let material = SigningMaterial::from_pem(private_key_pem)?;
    if material.curve() != curve {
        return Err(JwtError::InvalidKey(format!(
            "{} needs a {curve} key, got {}",
            header.algorithm,
            material.curve()
        )));
    }

    let header_json = serde_json::to_vec(&header.to_jose())
        .map_err(|e| JwtError::serialization(&e.to_string()))?;
    let claims_json =
        serde_json::to_vec(claims).map_err(|e| JwtError::serialization(&e.to_string()))?;

    let header_b64 = URL_SAFE_NO_PAD.encode(header_json);
    let claims_b64 = URL_SAFE_NO_PAD.encode(claims_json);

    let mut signing_input = String::with_capacity(header_b64.len() + 1 + claims_b64.len());
    signing_input.push_str(&header_b64);
    signing_input.push('.');
    signing_input.push_str(&claims_b64);

    let signature = match &material {
        SigningMaterial::P256(key) => {
            let signature: p256::ecdsa::Signature = key
                .try_sign(signing_input.as_bytes())
                .map_err(|e| JwtError::SigningError(e.to_string()))?;
            signature.to_bytes().to_vec()
        }
        SigningMaterial::P384(key) => {
            let signature: p384::ecdsa::Signature = key
                .try_sign(signing_input.as_bytes())
                .map_err(|e| JwtError::SigningError(e.to_string()))?;
            signature.to_bytes().to_vec()
        }
    };

    tracing::debug!(alg = %header.algorithm, len = signing_input.len(), "issued token");
    Ok(format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(signature)))
}
