//! Token panel state: edit, issue, verify
//!
//! Every change to the claims, the header or the pasted token starts a new
//! cycle tagged with a generation number. Cycles may finish out of order;
//! only the outcome whose generation matches the session's current one is
//! applied, so the badge always describes the newest token.

use crate::algorithm::Algorithm;
use crate::async_result::AsyncJwtResult;
use crate::editor::{ClaimsEditor, Document};
use crate::error::{ClaimsParseError, JwtError, JwtResult};
use crate::policy::VerificationPolicy;
use crate::types::{Claims, Header};
use crate::{issuer, verifier};
use hashlab_common::FailureMode;
use hashlab_key::KeyPair;
use std::fmt;
use std::sync::Arc;

/// Badge state for the current token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    /// Nothing verified yet, or no token to verify
    #[default]
    Pending,
    /// Signature and claims check out
    Verified,
    /// Some check failed; the reason is logged, not shown
    NotVerified,
}

impl VerificationStatus {
    /// Text for the badge
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Signature Verified",
            Self::NotVerified => "Signature Invalid",
        }
    }

    fn from_outcome(outcome: Option<&JwtResult<Claims>>) -> Self {
        match outcome {
            None => Self::Pending,
            Some(Ok(_)) => Self::Verified,
            Some(Err(_)) => Self::NotVerified,
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleKind {
    IssueAndVerify,
    VerifyOnly,
}

/// Snapshot of everything one issue/verify cycle needs
///
/// Detached from the session so it can run on another task.
#[derive(Debug, Clone)]
pub struct TokenCycle {
    generation: u64,
    kind: CycleKind,
    claims: Claims,
    header: Header,
    token: String,
    key_pair: Arc<KeyPair>,
    policy: VerificationPolicy,
    failure_mode: FailureMode,
}

/// What a cycle produced
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    generation: u64,
    issued: Option<JwtResult<String>>,
    verification: Option<JwtResult<Claims>>,
}

impl CycleOutcome {
    /// Generation of the cycle that produced this
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue result, if this cycle issued
    #[must_use]
    pub fn issued(&self) -> Option<&JwtResult<String>> {
        self.issued.as_ref()
    }

    /// Verification result, if a token was verified
    #[must_use]
    pub fn verification(&self) -> Option<&JwtResult<Claims>> {
        self.verification.as_ref()
    }
}

impl TokenCycle {
    /// Generation this cycle belongs to
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue (when asked to) and then verify, on the current thread
    #[must_use]
    pub fn run(self) -> CycleOutcome {
        let issued = match self.kind {
            CycleKind::IssueAndVerify => Some(issuer::issue(
                &self.claims,
                &self.header,
                self.key_pair.private_key(),
            )),
            CycleKind::VerifyOnly => None,
        };

        // A failed issue leaves the retained token to be judged by the new policy
        let candidate = match &issued {
            Some(Ok(token)) => Some(token.as_str()),
            Some(Err(_)) if self.failure_mode == FailureMode::Clear => None,
            _ => Some(self.token.as_str()).filter(|t| !t.trim().is_empty()),
        };

        let verification = candidate
            .map(|token| verifier::verify(token, self.key_pair.public_key(), &self.policy));

        CycleOutcome {
            generation: self.generation,
            issued,
            verification,
        }
    }

    /// Run on a spawned tokio task
    #[must_use]
    pub fn spawn(self) -> AsyncJwtResult<CycleOutcome> {
        AsyncJwtResult::spawn(move || Ok(self.run()))
    }
}

/// State behind the token panel
#[derive(Debug)]
pub struct TokenSession {
    editor: ClaimsEditor,
    key_pair: Arc<KeyPair>,
    policy: VerificationPolicy,
    failure_mode: FailureMode,
    generation: u64,
    token: String,
    status: VerificationStatus,
    last_failure: Option<JwtError>,
}

impl TokenSession {
    /// Session over the demo claims, signing with `key_pair`
    ///
    /// `policy` supplies issuers, audiences, required claims and timing; its
    /// algorithm list is replaced by the header's algorithm on every cycle.
    #[must_use]
    pub fn new(key_pair: Arc<KeyPair>, policy: VerificationPolicy, failure_mode: FailureMode) -> Self {
        Self {
            editor: ClaimsEditor::default(),
            key_pair,
            policy,
            failure_mode,
            generation: 0,
            token: String::new(),
            status: VerificationStatus::Pending,
            last_failure: None,
        }
    }

    /// Replace the editor, e.g. to start from fixed claims
    #[must_use]
    pub fn with_editor(mut self, editor: ClaimsEditor) -> Self {
        self.editor = editor;
        self
    }

    /// The claims and header editor
    #[must_use]
    pub fn editor(&self) -> &ClaimsEditor {
        &self.editor
    }

    /// Token currently displayed
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Badge state for [`TokenSession::token`]
    #[must_use]
    pub fn status(&self) -> VerificationStatus {
        self.status
    }

    /// Current generation
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Most recent issue failure, cleared by the next successful issue
    #[must_use]
    pub fn last_failure(&self) -> Option<&JwtError> {
        self.last_failure.as_ref()
    }

    /// Public key shown next to the token
    #[must_use]
    pub fn public_key(&self) -> &str {
        self.key_pair.public_key()
    }

    /// Retain-or-clear policy applied when issuing fails
    #[must_use]
    pub fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }

    /// Apply an edit and, if it parsed, start re-issuing
    ///
    /// # Errors
    ///
    /// Returns the parse error; no cycle starts and the token is untouched.
    pub fn edit(&mut self, document: Document, text: &str) -> Result<TokenCycle, ClaimsParseError> {
        self.editor.edit(document, text)?;
        Ok(self.begin_issue())
    }

    /// Switch algorithm and start re-issuing
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> TokenCycle {
        self.editor.set_algorithm(algorithm);
        self.begin_issue()
    }

    /// Replace claims wholesale and start re-issuing
    pub fn set_claims(&mut self, claims: Claims) -> TokenCycle {
        self.editor.set_claims(claims);
        self.begin_issue()
    }

    /// Show a token typed or pasted by the user and start verifying it
    pub fn paste_token(&mut self, token: impl Into<String>) -> TokenCycle {
        self.token = token.into();
        self.status = VerificationStatus::Pending;
        self.begin(CycleKind::VerifyOnly)
    }

    /// Verify the current token against the current header's algorithm
    pub fn reverify(&mut self) -> TokenCycle {
        self.begin(CycleKind::VerifyOnly)
    }

    /// Start a full issue-then-verify cycle from the current editor state
    pub fn begin_issue(&mut self) -> TokenCycle {
        self.begin(CycleKind::IssueAndVerify)
    }

    fn begin(&mut self, kind: CycleKind) -> TokenCycle {
        self.generation += 1;
        let header = self.editor.header().clone();
        TokenCycle {
            generation: self.generation,
            kind,
            claims: self.editor.claims().clone(),
            policy: self.policy.clone().with_algorithm(header.algorithm),
            header,
            token: self.token.clone(),
            key_pair: Arc::clone(&self.key_pair),
            failure_mode: self.failure_mode,
        }
    }

    /// Fold a finished cycle into the session
    ///
    /// Returns `false` and changes nothing if a newer cycle has started.
    pub fn apply(&mut self, outcome: CycleOutcome) -> bool {
        if outcome.generation != self.generation {
            tracing::debug!(
                stale = outcome.generation,
                current = self.generation,
                "discarding superseded token cycle"
            );
            return false;
        }

        match outcome.issued {
            Some(Ok(token)) => {
                self.token = token;
                self.last_failure = None;
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, mode = ?self.failure_mode, "token issue failed");
                if self.failure_mode == FailureMode::Clear {
                    self.token.clear();
                }
                self.last_failure = Some(e);
            }
            None => {}
        }

        if let Some(Err(e)) = &outcome.verification {
            tracing::warn!(reason = %e, "token not verified");
        }
        self.status = VerificationStatus::from_outcome(outcome.verification.as_ref());
        true
    }

    /// Run a full cycle on the current thread and apply it
    pub fn refresh(&mut self) -> VerificationStatus {
        let outcome = self.begin_issue().run();
        self.apply(outcome);
        self.status
    }
}
