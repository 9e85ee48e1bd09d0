//! Token header and claims

use crate::algorithm::Algorithm;
use crate::claims::ClaimsBuilder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Issuer placed in the demo claims and accepted by the default policy
pub const DEMO_ISSUER: &str = "node-rs.prod";
/// Audience placed in the demo claims and accepted by the default policy
pub const DEMO_AUDIENCE: &str = "https://node-rs.dev";
/// Lifetime of demo tokens
pub const ONE_WEEK_SECS: i64 = 7 * 24 * 60 * 60;

/// Editable token header
///
/// This is the shape shown in the header editor:
/// `{"algorithm": "ES256", "contentType": "JWT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Header {
    /// Signing algorithm
    pub algorithm: Algorithm,
    /// Content-type tag, emitted as `cty`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Key identifier, emitted as `kid`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::ES256,
            content_type: Some("JWT".to_string()),
            key_id: None,
        }
    }
}

impl Header {
    /// Header for `algorithm` with no content type
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            content_type: None,
            key_id: None,
        }
    }

    pub(crate) fn to_jose(&self) -> JoseHeader {
        JoseHeader {
            typ: Some("JWT".to_string()),
            alg: self.algorithm.as_str().to_string(),
            cty: self.content_type.clone(),
            kid: self.key_id.clone(),
        }
    }
}

/// Header as it appears in the first token segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoseHeader {
    /// Token type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Algorithm name, kept as text so unknown names can be reported
    pub alg: String,
    /// Content type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cty: Option<String>,
    /// Key identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

/// Token payload: a JSON object of claims
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Empty claims
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The claims the playground starts with, issued at `now`
    #[must_use]
    pub fn demo(now: i64) -> Self {
        let mut data = Map::new();
        data.insert("id".into(), Value::String(short_id()));
        data.insert("name".into(), Value::String("John Doe".into()));

        ClaimsBuilder::new()
            .with_custom("data", Value::Object(data))
            .with_subject(&short_id())
            .with_issuer(DEMO_ISSUER)
            .with_issued_at(now)
            .with_expiration(now + ONE_WEEK_SECS)
            .with_audience(DEMO_AUDIENCE)
            .build()
    }

    /// Claim by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Set a claim, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    /// Whether a claim is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// `sub`
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }

    /// `iss`
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.get("iss").and_then(Value::as_str)
    }

    /// `aud`, as a list whether encoded as a string or an array
    #[must_use]
    pub fn audiences(&self) -> Vec<&str> {
        match self.get("aud") {
            Some(Value::String(aud)) => vec![aud.as_str()],
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// `exp`
    #[must_use]
    pub fn expiration(&self) -> Option<i64> {
        self.get("exp").and_then(Value::as_i64)
    }

    /// `nbf`
    #[must_use]
    pub fn not_before(&self) -> Option<i64> {
        self.get("nbf").and_then(Value::as_i64)
    }

    /// `iat`
    #[must_use]
    pub fn issued_at(&self) -> Option<i64> {
        self.get("iat").and_then(Value::as_i64)
    }

    /// The underlying JSON object
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Pretty-printed JSON, as shown in the editor
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        // A Map<String, Value> always serializes
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Claims {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

fn short_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(21);
    id
}
