//! Token panel

use crate::config::PlaygroundConfig;
use hashlab_common::LoggingTransformer;
use hashlab_jwt::{
    Algorithm, ClaimsParseError, CycleOutcome, Document, JoseHeader, TokenCycle, TokenSession,
    decode_unverified,
};
use hashlab_key::KeyProvisioner;

/// State of the token panel
///
/// If key generation failed at startup the panel is disabled and only shows
/// why; the other panels are unaffected.
#[derive(Debug)]
pub struct TokenPanel {
    session: Result<TokenSession, String>,
    /// Claims text being edited
    pub claims_buffer: String,
    /// Header text being edited
    pub header_buffer: String,
    /// Token text being pasted
    pub token_buffer: String,
    parse_error: Option<(Document, ClaimsParseError)>,
}

impl TokenPanel {
    /// Panel signing with the provisioner's key pair
    pub fn new(provisioner: &KeyProvisioner, config: &PlaygroundConfig) -> Self {
        let session = match provisioner.key_pair() {
            Ok(key_pair) => Ok(TokenSession::new(
                key_pair,
                config.verification_policy(),
                config.failure_mode,
            )),
            Err(e) => {
                LoggingTransformer::log_operation_error("key generation", &e);
                Err(e.to_string())
            }
        };
        Self::from_session(session)
    }

    /// Panel around an existing session, or disabled with a reason
    #[must_use]
    pub fn from_session(session: Result<TokenSession, String>) -> Self {
        Self {
            session,
            claims_buffer: String::new(),
            header_buffer: String::new(),
            token_buffer: String::new(),
            parse_error: None,
        }
    }

    /// The session, unless the panel is disabled
    #[must_use]
    pub fn session(&self) -> Option<&TokenSession> {
        self.session.as_ref().ok()
    }

    /// Why the panel is disabled
    #[must_use]
    pub fn unavailable_reason(&self) -> Option<&str> {
        self.session.as_ref().err().map(String::as_str)
    }

    /// Last rejected edit
    #[must_use]
    pub fn parse_error(&self) -> Option<&(Document, ClaimsParseError)> {
        self.parse_error.as_ref()
    }

    /// Header carried by the current token, read without verifying it
    ///
    /// A pasted token may name a different algorithm or key than the editor.
    #[must_use]
    pub fn token_header(&self) -> Option<JoseHeader> {
        let session = self.session()?;
        decode_unverified(session.token()).ok().map(|(header, _)| header)
    }

    /// Load the current text of `document` into its edit buffer
    pub fn begin_edit(&mut self, document: Document) {
        let Ok(session) = &self.session else {
            return;
        };
        let text = session.editor().text(document).to_string();
        match document {
            Document::Claims => self.claims_buffer = text,
            Document::Header => self.header_buffer = text,
        }
    }

    /// Load the current token into the paste buffer
    pub fn begin_paste(&mut self) {
        if let Ok(session) = &self.session {
            self.token_buffer = session.token().to_string();
        }
    }

    /// Apply an edit buffer; `None` if it did not parse or the panel is off
    pub fn submit_edit(&mut self, document: Document) -> Option<TokenCycle> {
        let session = self.session.as_mut().ok()?;
        let text = match document {
            Document::Claims => &self.claims_buffer,
            Document::Header => &self.header_buffer,
        };
        match session.edit(document, text) {
            Ok(cycle) => {
                self.parse_error = None;
                Some(cycle)
            }
            Err(e) => {
                LoggingTransformer::log_rejection("claims edit", &e.to_string());
                self.parse_error = Some((document, e));
                None
            }
        }
    }

    /// Verify the paste buffer as the current token
    pub fn submit_paste(&mut self) -> Option<TokenCycle> {
        let session = self.session.as_mut().ok()?;
        Some(session.paste_token(self.token_buffer.trim()))
    }

    /// Move the header to the next algorithm and re-issue
    pub fn cycle_algorithm(&mut self) -> Option<TokenCycle> {
        let session = self.session.as_mut().ok()?;
        let next: Algorithm = session.editor().header().algorithm.cycle();
        Some(session.set_algorithm(next))
    }

    /// Re-issue from the current claims and header
    pub fn reissue(&mut self) -> Option<TokenCycle> {
        Some(self.session.as_mut().ok()?.begin_issue())
    }

    /// Fold a finished cycle in; `false` if it was stale
    pub fn apply(&mut self, outcome: CycleOutcome) -> bool {
        match self.session.as_mut() {
            Ok(session) => session.apply(outcome),
            Err(_) => false,
        }
    }
}
