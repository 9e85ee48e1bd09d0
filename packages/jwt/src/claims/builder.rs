//! Builder for token claims

use crate::types::Claims;
use serde_json::{Map, Value};

/// Claims builder for creating token payloads
#[derive(Debug, Clone, Default)]
pub struct ClaimsBuilder {
    claims: Map<String, Value>,
}

impl ClaimsBuilder {
    /// Create new claims builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set subject claim
    #[inline]
    #[must_use]
    pub fn with_subject(mut self, subject: &str) -> Self {
        self.claims
            .insert("sub".to_string(), Value::String(subject.to_string()));
        self
    }

    /// Set issuer claim
    #[inline]
    #[must_use]
    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.claims
            .insert("iss".to_string(), Value::String(issuer.to_string()));
        self
    }

    /// Set audience claim as string
    #[inline]
    #[must_use]
    pub fn with_audience(mut self, audience: &str) -> Self {
        self.claims
            .insert("aud".to_string(), Value::String(audience.to_string()));
        self
    }

    /// Set expiration time
    #[inline]
    #[must_use]
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.claims.insert("exp".to_string(), Value::from(exp));
        self
    }

    /// Set issued at time
    #[inline]
    #[must_use]
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.claims.insert("iat".to_string(), Value::from(iat));
        self
    }

    /// Set any claim to an arbitrary JSON value
    #[inline]
    #[must_use]
    pub fn with_custom(mut self, claim: &str, value: Value) -> Self {
        self.claims.insert(claim.to_string(), value);
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Claims {
        Claims::from(self.claims)
    }
}
