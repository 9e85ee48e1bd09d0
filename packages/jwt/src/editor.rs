//! Claims and header as editable JSON text
//!
//! The editor owns two drafts (what the user typed) and two parsed values
//! (the last drafts that parsed). A failed parse updates the draft and
//! records the error, but the parsed value stays as it was.

use crate::algorithm::Algorithm;
use crate::error::ClaimsParseError;
use crate::types::{Claims, Header};
use serde_json::Value;

/// Which document an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    /// The claims object
    Claims,
    /// The header object
    Header,
}

/// Holds the current claims and header and parses user edits
#[derive(Debug, Clone)]
pub struct ClaimsEditor {
    claims: Claims,
    header: Header,
    claims_draft: String,
    header_draft: String,
    claims_error: Option<ClaimsParseError>,
    header_error: Option<ClaimsParseError>,
}

impl ClaimsEditor {
    /// Editor seeded with `claims` and `header`
    #[must_use]
    pub fn new(claims: Claims, header: Header) -> Self {
        let claims_draft = claims.to_pretty_json();
        let header_draft = pretty_header(&header);
        Self {
            claims,
            header,
            claims_draft,
            header_draft,
            claims_error: None,
            header_error: None,
        }
    }

    /// Editor with the playground's demo claims issued at `now`
    #[must_use]
    pub fn demo(now: i64) -> Self {
        Self::new(Claims::demo(now), Header::default())
    }

    /// Last claims that parsed
    #[must_use]
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Last header that parsed
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Claims text as last typed
    #[must_use]
    pub fn claims_text(&self) -> &str {
        &self.claims_draft
    }

    /// Header text as last typed
    #[must_use]
    pub fn header_text(&self) -> &str {
        &self.header_draft
    }

    /// Text of either document
    #[must_use]
    pub fn text(&self, document: Document) -> &str {
        match document {
            Document::Claims => &self.claims_draft,
            Document::Header => &self.header_draft,
        }
    }

    /// Parse error of either document's current draft
    #[must_use]
    pub fn error(&self, document: Document) -> Option<&ClaimsParseError> {
        match document {
            Document::Claims => self.claims_error.as_ref(),
            Document::Header => self.header_error.as_ref(),
        }
    }

    /// Replace the claims from edited text
    ///
    /// # Errors
    ///
    /// Returns [`ClaimsParseError`] if `text` is not a JSON object; the
    /// previous claims are kept.
    pub fn edit_claims(&mut self, text: &str) -> Result<(), ClaimsParseError> {
        self.claims_draft = text.to_string();
        let parsed = serde_json::from_str::<Value>(text)
            .map_err(ClaimsParseError::from)
            .and_then(|value| {
                Claims::try_from(value)
                    .map_err(|other| ClaimsParseError::NotAnObject(json_type(&other)))
            });
        match parsed {
            Ok(claims) => {
                self.claims = claims;
                self.claims_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "claims edit rejected");
                self.claims_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Replace the header from edited text
    ///
    /// # Errors
    ///
    /// Returns [`ClaimsParseError`] if `text` does not describe a header with
    /// a known algorithm; the previous header is kept.
    pub fn edit_header(&mut self, text: &str) -> Result<(), ClaimsParseError> {
        self.header_draft = text.to_string();
        match serde_json::from_str::<Header>(text) {
            Ok(header) => {
                self.header = header;
                self.header_error = None;
                Ok(())
            }
            Err(e) => {
                let e = ClaimsParseError::from(e);
                tracing::debug!(error = %e, "header edit rejected");
                self.header_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Edit either document
    ///
    /// # Errors
    ///
    /// See [`ClaimsEditor::edit_claims`] and [`ClaimsEditor::edit_header`].
    pub fn edit(&mut self, document: Document, text: &str) -> Result<(), ClaimsParseError> {
        match document {
            Document::Claims => self.edit_claims(text),
            Document::Header => self.edit_header(text),
        }
    }

    /// Change only the algorithm, regenerating the header text
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.header.algorithm = algorithm;
        self.header_draft = pretty_header(&self.header);
        self.header_error = None;
    }

    /// Replace the claims wholesale, regenerating the claims text
    pub fn set_claims(&mut self, claims: Claims) {
        self.claims_draft = claims.to_pretty_json();
        self.claims = claims;
        self.claims_error = None;
    }
}

impl Default for ClaimsEditor {
    fn default() -> Self {
        Self::demo(chrono::Utc::now().timestamp())
    }
}

fn pretty_header(header: &Header) -> String {
    // Header holds only strings and a unit enum, so this cannot fail
    serde_json::to_string_pretty(header).unwrap_or_else(|_| "{}".to_string())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
