//! Token verification against a public key and a policy

use crate::algorithm::Algorithm;
use crate::claims::validation;
use crate::error::{JwtError, JwtResult};
use crate::policy::VerificationPolicy;
use crate::types::{Claims, JoseHeader};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hashlab_key::VerifyingMaterial;
use p256::ecdsa::signature::Verifier;
use serde::de::DeserializeOwned;

/// Verify `token` with a PEM-encoded SPKI public key under `policy`
///
/// Checks run in order: shape, header, algorithm allow-list, signature,
/// payload, then claims. Claims are only inspected once the signature holds.
///
/// # Errors
///
/// Any failed check, as the matching [`JwtError`] variant.
pub fn verify(token: &str, public_key_pem: &str, policy: &VerificationPolicy) -> JwtResult<Claims> {
    let Segments {
        header,
        payload,
        signature,
        signing_input,
    } = split(token)?;

    let jose: JoseHeader = decode_segment(header, "header")?;
    let algorithm: Algorithm = jose.alg.parse()?;
    if !policy.allowed_algorithms.contains(&algorithm) {
        return Err(JwtError::AlgorithmNotAllowed(algorithm.to_string()));
    }

    let curve = algorithm.curve()?;
    let material = VerifyingMaterial::from_pem(public_key_pem)?;
    if material.curve() != curve {
        return Err(JwtError::InvalidKey(format!(
            "{algorithm} needs a {curve} key, got {}",
            material.curve()
        )));
    }

    let signature_bytes = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|_| JwtError::InvalidSignature)?;

    match &material {
        VerifyingMaterial::P256(key) => {
            let signature = p256::ecdsa::Signature::from_slice(&signature_bytes)
                .map_err(|_| JwtError::InvalidSignature)?;
            key.verify(signing_input.as_bytes(), &signature)
                .map_err(|_| JwtError::InvalidSignature)?;
        }
        VerifyingMaterial::P384(key) => {
            let signature = p384::ecdsa::Signature::from_slice(&signature_bytes)
                .map_err(|_| JwtError::InvalidSignature)?;
            key.verify(signing_input.as_bytes(), &signature)
                .map_err(|_| JwtError::InvalidSignature)?;
        }
    }

    let claims = decode_claims(payload)?;
    validation::validate(&claims, policy)?;
    Ok(claims)
}

/// Decode header and claims without checking anything
///
/// For display only; never trust the result.
///
/// # Errors
///
/// Returns an error if the token is not three segments of base64url JSON.
pub fn decode_unverified(token: &str) -> JwtResult<(JoseHeader, Claims)> {
    let segments = split(token)?;
    let header = decode_segment(segments.header, "header")?;
    let claims = decode_claims(segments.payload)?;
    Ok((header, claims))
}

struct Segments<'a> {
    header: &'a str,
    payload: &'a str,
    signature: &'a str,
    signing_input: &'a str,
}

fn split(token: &str) -> JwtResult<Segments<'_>> {
    let token = token.trim();
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(JwtError::InvalidFormat);
    };
    if header.is_empty() || payload.is_empty() {
        return Err(JwtError::InvalidFormat);
    }

    Ok(Segments {
        header,
        payload,
        signature,
        signing_input: &token[..header.len() + 1 + payload.len()],
    })
}

fn decode_segment<T: DeserializeOwned>(segment: &str, what: &str) -> JwtResult<T> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| JwtError::InvalidToken(format!("{what} is not base64url")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| JwtError::InvalidToken(format!("{what} is not valid JSON: {e}")))
}

fn decode_claims(payload: &str) -> JwtResult<Claims> {
    let value: serde_json::Value = decode_segment(payload, "payload")?;
    Claims::try_from(value).map_err(|_| JwtError::invalid_token("payload is not a JSON object"))
}
