//! Claim checks applied after the signature is trusted

use crate::error::JwtError;
use crate::policy::VerificationPolicy;
use crate::types::Claims;
use serde_json::Value;

/// Run every policy check against `claims`
pub(crate) fn validate(claims: &Claims, policy: &VerificationPolicy) -> Result<(), JwtError> {
    for name in &policy.required_claims {
        if !claims.contains(name) {
            return Err(JwtError::missing_claim(name));
        }
    }

    validate_numeric_claim(claims, "exp")?;
    validate_numeric_claim(claims, "nbf")?;
    validate_numeric_claim(claims, "iat")?;
    validate_string_claim(claims, "iss")?;
    validate_string_claim(claims, "sub")?;
    validate_audience_shape(claims)?;

    validate_time_claims(claims, policy)?;

    if !policy.issuers.is_empty() {
        let accepted = claims
            .issuer()
            .is_some_and(|iss| policy.issuers.iter().any(|i| i == iss));
        if !accepted {
            return Err(JwtError::InvalidIssuer);
        }
    }

    if !policy.audiences.is_empty() {
        let accepted = claims
            .audiences()
            .into_iter()
            .any(|aud| policy.audiences.iter().any(|a| a == aud));
        if !accepted {
            return Err(JwtError::InvalidAudience);
        }
    }

    Ok(())
}

fn validate_time_claims(claims: &Claims, policy: &VerificationPolicy) -> Result<(), JwtError> {
    let now = policy.now();
    let leeway = policy.leeway.num_seconds();

    if policy.validate_exp
        && let Some(exp) = claims.expiration()
        && now - leeway > exp
    {
        return Err(JwtError::TokenExpired);
    }

    if policy.validate_nbf
        && let Some(nbf) = claims.not_before()
        && now + leeway < nbf
    {
        return Err(JwtError::TokenNotYetValid);
    }

    Ok(())
}

fn validate_numeric_claim(claims: &Claims, claim_name: &str) -> Result<(), JwtError> {
    match claims.get(claim_name) {
        Some(value) if value.as_i64().is_none() => Err(JwtError::InvalidClaims(format!(
            "{claim_name} must be an integer timestamp"
        ))),
        _ => Ok(()),
    }
}

fn validate_string_claim(claims: &Claims, claim_name: &str) -> Result<(), JwtError> {
    if let Some(value) = claims.get(claim_name) {
        match value.as_str() {
            Some("") => {
                return Err(JwtError::InvalidClaims(format!(
                    "{claim_name} cannot be empty"
                )));
            }
            Some(_) => {}
            None => {
                return Err(JwtError::InvalidClaims(format!(
                    "{claim_name} must be a string"
                )));
            }
        }
    }
    Ok(())
}

fn validate_audience_shape(claims: &Claims) -> Result<(), JwtError> {
    match claims.get("aud") {
        None | Some(Value::String(_)) => Ok(()),
        Some(Value::Array(items)) if items.iter().all(Value::is_string) => Ok(()),
        Some(_) => Err(JwtError::invalid_claims(
            "aud must be a string or array of strings",
        )),
    }
}
