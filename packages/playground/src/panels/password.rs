//! Argon2 and bcrypt panels
//!
//! Both panels share one shape: a password to hash, a candidate to check
//! against a hash, and scheme-specific cost fields kept as text until submit.

use hashlab_common::{FailureMode, LoggingTransformer};
use hashlab_hashing::{
    Argon2Params, Argon2Variant, AsyncHashResult, Hash, HashError, HashResult, Verification,
};
use zeroize::Zeroizing;

/// What a verify attempt came back with: a match, a mismatch, or a hash that
/// could not be checked
pub type VerifyOutcome = hashlab_hashing::Result<HashResult<Verification>>;

/// Scheme-specific half of a password panel
pub trait PasswordForm: Send {
    /// Scheme name for labels and logs
    fn name(&self) -> &'static str;

    /// Start hashing `password` with the form's current parameters
    fn hash(&self, password: &str) -> AsyncHashResult<HashResult<String>>;

    /// Start checking `password` against `hash`
    fn verify(&self, password: &str, hash: &str) -> AsyncHashResult<HashResult<Verification>>;
}

/// Argon2 cost fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2Form {
    /// Selected flavour
    pub variant: Argon2Variant,
    /// Passes, as typed
    pub time_cost: String,
    /// Lanes, as typed
    pub parallelism: String,
    /// Memory in KiB, as typed
    pub memory_cost: String,
    output_len: usize,
}

impl Argon2Form {
    /// Form showing `params`
    #[must_use]
    pub fn new(params: Argon2Params) -> Self {
        Self {
            variant: params.variant,
            time_cost: params.time_cost.to_string(),
            parallelism: params.parallelism.to_string(),
            memory_cost: params.memory_cost.to_string(),
            output_len: params.output_len,
        }
    }

    /// Parse the typed fields
    ///
    /// Only the shape is checked here; ranges are left to the primitive.
    ///
    /// # Errors
    ///
    /// [`HashError::InvalidParameters`] if a field is not a whole number.
    pub fn params(&self) -> hashlab_hashing::Result<Argon2Params> {
        Ok(Argon2Params {
            variant: self.variant,
            time_cost: parse_cost("time cost", &self.time_cost)?,
            parallelism: parse_cost("parallelism", &self.parallelism)?,
            memory_cost: parse_cost("memory cost", &self.memory_cost)?,
            output_len: self.output_len,
        })
    }

    /// Next flavour in `Argon2d → Argon2i → Argon2id` order
    pub fn cycle_variant(&mut self) {
        let all = Argon2Variant::ALL;
        let at = all.iter().position(|v| *v == self.variant).unwrap_or(0);
        self.variant = all[(at + 1) % all.len()];
    }
}

impl PasswordForm for Argon2Form {
    fn name(&self) -> &'static str {
        "argon2"
    }

    fn hash(&self, password: &str) -> AsyncHashResult<HashResult<String>> {
        match self.params() {
            Ok(params) => Hash::argon2().with_params(params).hash(password),
            Err(e) => AsyncHashResult::error(e),
        }
    }

    fn verify(&self, password: &str, hash: &str) -> AsyncHashResult<HashResult<Verification>> {
        // Cost parameters come from the PHC string itself
        Hash::argon2().verify(password, hash)
    }
}

/// bcrypt work factor field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BcryptForm {
    /// Work factor, as typed
    pub cost: String,
}

impl BcryptForm {
    /// Form showing `cost`
    #[must_use]
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.to_string(),
        }
    }

    /// Parse the typed work factor
    ///
    /// # Errors
    ///
    /// [`HashError::InvalidParameters`] if it is not a whole number.
    pub fn cost(&self) -> hashlab_hashing::Result<u32> {
        parse_cost("cost", &self.cost)
    }
}

impl PasswordForm for BcryptForm {
    fn name(&self) -> &'static str {
        "bcrypt"
    }

    fn hash(&self, password: &str) -> AsyncHashResult<HashResult<String>> {
        match self.cost() {
            Ok(cost) => Hash::bcrypt().cost(cost).hash(password),
            Err(e) => AsyncHashResult::error(e),
        }
    }

    fn verify(&self, password: &str, hash: &str) -> AsyncHashResult<HashResult<Verification>> {
        Hash::bcrypt().verify(password, hash)
    }
}

fn parse_cost(label: &str, text: &str) -> hashlab_hashing::Result<u32> {
    text.trim()
        .parse()
        .map_err(|_| HashError::invalid_parameters(format!("{label} must be a whole number")))
}

/// State of one password panel
#[derive(Debug)]
pub struct PasswordPanel<F> {
    /// Password to hash
    pub password: Zeroizing<String>,
    /// Password to check against [`PasswordPanel::target_hash`]
    pub candidate: Zeroizing<String>,
    /// Hash to check; filled in by every successful hash
    pub target_hash: String,
    /// Scheme-specific fields
    pub form: F,
    output: Option<HashResult<String>>,
    verdict: Option<VerifyOutcome>,
    hashing: bool,
    verifying: bool,
    last_error: Option<HashError>,
}

impl<F: PasswordForm> PasswordPanel<F> {
    /// Empty panel around `form`
    pub fn new(form: F) -> Self {
        Self {
            password: Zeroizing::new(String::new()),
            candidate: Zeroizing::new(String::new()),
            target_hash: String::new(),
            form,
            output: None,
            verdict: None,
            hashing: false,
            verifying: false,
            last_error: None,
        }
    }

    /// Last hash and its timing
    pub fn output(&self) -> Option<&HashResult<String>> {
        self.output.as_ref()
    }

    /// Last verify outcome
    pub fn verdict(&self) -> Option<&VerifyOutcome> {
        self.verdict.as_ref()
    }

    /// Why the last hash failed, until the next one succeeds
    pub fn last_error(&self) -> Option<&HashError> {
        self.last_error.as_ref()
    }

    /// A hash is in flight
    pub fn is_hashing(&self) -> bool {
        self.hashing
    }

    /// A verify is in flight
    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    /// Hash submission is enabled
    pub fn can_hash(&self) -> bool {
        !self.password.is_empty() && !self.hashing
    }

    /// Verify submission is enabled
    pub fn can_verify(&self) -> bool {
        !self.candidate.is_empty() && !self.target_hash.trim().is_empty() && !self.verifying
    }

    /// Start hashing, unless submission is disabled
    pub fn start_hash(&mut self) -> Option<AsyncHashResult<HashResult<String>>> {
        if !self.can_hash() {
            return None;
        }
        self.hashing = true;
        LoggingTransformer::log_secret_operation(self.form.name(), &self.password);
        Some(self.form.hash(&self.password))
    }

    /// Take a finished hash
    pub fn finish_hash(
        &mut self,
        result: hashlab_hashing::Result<HashResult<String>>,
        failure_mode: FailureMode,
    ) {
        self.hashing = false;
        match result {
            Ok(hashed) => {
                LoggingTransformer::log_performance_metric(
                    self.form.name(),
                    hashed.elapsed_ms(),
                    true,
                );
                self.target_hash = hashed.value().clone();
                self.verdict = None;
                self.last_error = None;
                self.output = Some(hashed);
            }
            Err(e) => {
                LoggingTransformer::log_operation_error(self.form.name(), &e);
                failure_mode.on_failure(&mut self.output);
                self.last_error = Some(e);
            }
        }
    }

    /// Start verifying, unless submission is disabled
    pub fn start_verify(&mut self) -> Option<AsyncHashResult<HashResult<Verification>>> {
        if !self.can_verify() {
            return None;
        }
        self.verifying = true;
        Some(self.form.verify(&self.candidate, &self.target_hash))
    }

    /// Take a finished verify
    pub fn finish_verify(&mut self, outcome: VerifyOutcome) {
        self.verifying = false;
        match &outcome {
            Ok(checked) if !checked.value().is_verified() => {
                LoggingTransformer::log_rejection(self.form.name(), "password does not match");
            }
            Err(e) => LoggingTransformer::log_operation_error(self.form.name(), e),
            Ok(_) => {}
        }
        self.verdict = Some(outcome);
    }
}
