//! Verification policy

use crate::algorithm::Algorithm;
use crate::types::{DEMO_AUDIENCE, DEMO_ISSUER};
use chrono::{Duration, Utc};

/// Claims the playground insists on
pub const REQUIRED_SPEC_CLAIMS: [&str; 4] = ["exp", "iat", "iss", "sub"];

/// What a token must satisfy to count as verified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationPolicy {
    /// Algorithms the header may name
    pub allowed_algorithms: Vec<Algorithm>,
    /// Claims that must be present
    pub required_claims: Vec<String>,
    /// Accepted `iss` values; empty accepts any
    pub issuers: Vec<String>,
    /// Accepted `aud` values; empty accepts any
    pub audiences: Vec<String>,
    /// Clock skew tolerated on `exp` and `nbf`
    pub leeway: Duration,
    /// Reject expired tokens
    pub validate_exp: bool,
    /// Reject tokens before `nbf`
    pub validate_nbf: bool,
    /// Evaluate time claims at this Unix time instead of the system clock
    pub reference_time: Option<i64>,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            allowed_algorithms: vec![Algorithm::ES256],
            required_claims: REQUIRED_SPEC_CLAIMS.iter().map(ToString::to_string).collect(),
            issuers: vec![DEMO_ISSUER.to_string()],
            audiences: vec![DEMO_AUDIENCE.to_string()],
            leeway: Duration::seconds(60),
            validate_exp: true,
            validate_nbf: false,
            reference_time: None,
        }
    }
}

impl VerificationPolicy {
    /// Allow exactly one algorithm
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.allowed_algorithms = vec![algorithm];
        self
    }

    /// Set the time leeway for validation
    #[must_use]
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// Set whether to validate expiration
    #[must_use]
    pub fn validate_expiration(mut self, validate: bool) -> Self {
        self.validate_exp = validate;
        self
    }

    /// Set whether to validate not-before
    #[must_use]
    pub fn validate_not_before(mut self, validate: bool) -> Self {
        self.validate_nbf = validate;
        self
    }

    /// Replace the required claims
    #[must_use]
    pub fn require_claims<I, S>(mut self, claims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_claims = claims.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the accepted issuers
    #[must_use]
    pub fn expect_issuers<I, S>(mut self, issuers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.issuers = issuers.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the accepted audiences
    #[must_use]
    pub fn expect_audiences<I, S>(mut self, audiences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.audiences = audiences.into_iter().map(Into::into).collect();
        self
    }

    /// Evaluate time claims as of `unix_seconds`
    #[must_use]
    pub fn at_time(mut self, unix_seconds: i64) -> Self {
        self.reference_time = Some(unix_seconds);
        self
    }

    pub(crate) fn now(&self) -> i64 {
        self.reference_time
            .unwrap_or_else(|| Utc::now().timestamp())
    }
}
