//! Argon2 and bcrypt builders

use crate::password::{
    Argon2Params, Argon2Scheme, Argon2Variant, BcryptScheme, PasswordScheme, Verification,
};
use crate::{AsyncHashResult, HashError, HashResult};
use zeroize::Zeroizing;

/// Argon2 builder
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Builder {
    params: Argon2Params,
}

impl Argon2Builder {
    /// Builder with default cost parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every cost parameter at once
    #[must_use]
    pub fn with_params(mut self, params: Argon2Params) -> Self {
        self.params = params;
        self
    }

    /// Argon2 flavour
    #[must_use]
    pub fn variant(mut self, variant: Argon2Variant) -> Self {
        self.params.variant = variant;
        self
    }

    /// Number of passes
    #[must_use]
    pub fn time_cost(mut self, time_cost: u32) -> Self {
        self.params.time_cost = time_cost;
        self
    }

    /// Degree of parallelism
    #[must_use]
    pub fn parallelism(mut self, parallelism: u32) -> Self {
        self.params.parallelism = parallelism;
        self
    }

    /// Memory size in KiB
    #[must_use]
    pub fn memory_cost(mut self, memory_cost: u32) -> Self {
        self.params.memory_cost = memory_cost;
        self
    }

    /// Hash `password` on the blocking pool
    #[must_use]
    pub fn hash(self, password: impl Into<String>) -> AsyncHashResult<HashResult<String>> {
        spawn_hash(Argon2Scheme::new(self.params), password.into())
    }

    /// Check `password` against `hash`; cost parameters are read from `hash`
    #[must_use]
    pub fn verify(
        self,
        password: impl Into<String>,
        hash: impl Into<String>,
    ) -> AsyncHashResult<HashResult<Verification>> {
        spawn_verify(Argon2Scheme::new(self.params), password.into(), hash.into())
    }
}

/// bcrypt builder
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptBuilder {
    scheme: BcryptScheme,
}

impl BcryptBuilder {
    /// Builder with the default work factor
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Work factor (4..=31)
    #[must_use]
    pub fn cost(mut self, cost: u32) -> Self {
        self.scheme = BcryptScheme::new(cost);
        self
    }

    /// Hash `password` on the blocking pool
    #[must_use]
    pub fn hash(self, password: impl Into<String>) -> AsyncHashResult<HashResult<String>> {
        spawn_hash(self.scheme, password.into())
    }

    /// Check `password` against `hash`
    #[must_use]
    pub fn verify(
        self,
        password: impl Into<String>,
        hash: impl Into<String>,
    ) -> AsyncHashResult<HashResult<Verification>> {
        spawn_verify(self.scheme, password.into(), hash.into())
    }
}

fn spawn_hash<S>(scheme: S, password: String) -> AsyncHashResult<HashResult<String>>
where
    S: PasswordScheme + 'static,
{
    let password = Zeroizing::new(password);
    if password.is_empty() {
        return AsyncHashResult::error(HashError::EmptyPassword);
    }

    AsyncHashResult::spawn_blocking(move || {
        let result = HashResult::measure(|| scheme.hash(&password));
        match &result {
            Ok(done) => tracing::debug!(
                scheme = scheme.name(),
                elapsed_ms = done.elapsed_ms(),
                "password hashed"
            ),
            Err(e) => tracing::warn!(scheme = scheme.name(), error = %e, "password hashing failed"),
        }
        result
    })
}

fn spawn_verify<S>(
    scheme: S,
    password: String,
    hash: String,
) -> AsyncHashResult<HashResult<Verification>>
where
    S: PasswordScheme + 'static,
{
    let password = Zeroizing::new(password);
    if password.is_empty() {
        return AsyncHashResult::error(HashError::EmptyPassword);
    }

    AsyncHashResult::spawn_blocking(move || {
        let result = HashResult::measure(|| scheme.verify(&password, hash.trim()));
        match &result {
            Ok(done) => tracing::debug!(
                scheme = scheme.name(),
                outcome = %done.value(),
                elapsed_ms = done.elapsed_ms(),
                "password checked"
            ),
            Err(e) => tracing::warn!(scheme = scheme.name(), error = %e, "password check failed"),
        }
        result
    })
}
