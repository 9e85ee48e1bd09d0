//! Playground configuration file

use hashlab_common::{Error, ErrorKind, FailureMode, ResultExt};
use hashlab_hashing::password::DEFAULT_BCRYPT_COST;
use hashlab_hashing::{Argon2Params, XxhashVariant};
use hashlab_jwt::{DEMO_AUDIENCE, DEMO_ISSUER, REQUIRED_SPEC_CLAIMS, VerificationPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Everything the playground reads from `config.json`
///
/// Every field has a default, so an empty object is a valid file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Initial Argon2 cost parameters
    #[serde(default)]
    pub argon2: Argon2Params,
    /// Initial bcrypt work factor
    #[serde(default)]
    pub bcrypt: BcryptConfig,
    /// Initial xxHash variant and seed
    #[serde(default)]
    pub xxhash: XxhashConfig,
    /// What the token verifier accepts
    #[serde(default)]
    pub jwt: JwtConfig,
    /// Keep or blank a panel's output when an operation fails
    #[serde(default)]
    pub failure_mode: FailureMode,
    /// How long a toast stays up
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    /// Show a toast when a clipboard write fails instead of only logging it
    #[serde(default)]
    pub surface_clipboard_errors: bool,
    /// Log file used while the terminal UI runs
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// UI redraw interval
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// `bcrypt` section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BcryptConfig {
    /// Work factor
    #[serde(default = "default_bcrypt_cost")]
    pub cost: u32,
}

/// `xxhash` section
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XxhashConfig {
    /// Variant selected at startup
    #[serde(default)]
    pub variant: XxhashVariant,
    /// Seed applied to every variant
    #[serde(default)]
    pub seed: u64,
}

/// `jwt` section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Accepted `iss` values; empty accepts any
    #[serde(default = "default_issuers")]
    pub issuers: Vec<String>,
    /// Accepted `aud` values; empty accepts any
    #[serde(default = "default_audiences")]
    pub audiences: Vec<String>,
    /// Claims a token must carry
    #[serde(default = "default_required_claims")]
    pub required_claims: Vec<String>,
    /// Clock skew tolerated on `exp` and `nbf`
    #[serde(default = "default_leeway_seconds")]
    pub leeway_seconds: u32,
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}

fn default_issuers() -> Vec<String> {
    vec![DEMO_ISSUER.to_string()]
}

fn default_audiences() -> Vec<String> {
    vec![DEMO_AUDIENCE.to_string()]
}

fn default_required_claims() -> Vec<String> {
    REQUIRED_SPEC_CLAIMS.iter().map(ToString::to_string).collect()
}

fn default_leeway_seconds() -> u32 {
    60
}

impl Default for BcryptConfig {
    fn default() -> Self {
        Self {
            cost: default_bcrypt_cost(),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            issuers: default_issuers(),
            audiences: default_audiences(),
            required_claims: default_required_claims(),
            leeway_seconds: default_leeway_seconds(),
        }
    }
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            argon2: Argon2Params::default(),
            bcrypt: BcryptConfig::default(),
            xxhash: XxhashConfig::default(),
            jwt: JwtConfig::default(),
            failure_mode: FailureMode::default(),
            toast_duration_ms: default_toast_duration_ms(),
            surface_clipboard_errors: false,
            log_file: None,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl PlaygroundConfig {
    /// `<config dir>/hashlab/config.json`, if the OS has a config dir
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hashlab").join("config.json"))
    }

    /// Load from `path`, or from [`PlaygroundConfig::default_path`]
    ///
    /// A missing file at the default location means defaults. A path given
    /// explicitly must exist.
    ///
    /// # Errors
    ///
    /// A `Configuration` error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> hashlab_common::Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> hashlab_common::Result<Self> {
        let text = std::fs::read_to_string(path).with_context(ErrorKind::Configuration, || {
            format!("cannot read {}", path.display())
        })?;
        Self::from_json(&text).map_err(|e| e.context(format!("in {}", path.display())))
    }

    /// Parse configuration text
    ///
    /// # Errors
    ///
    /// A `Configuration` error for invalid JSON or mistyped fields.
    pub fn from_json(text: &str) -> hashlab_common::Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| Error::with_source(ErrorKind::Configuration, e))
    }

    /// Where the terminal UI writes its log
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }
        match dirs::data_dir() {
            Some(dir) => dir.join("hashlab").join("hashlab.log"),
            None => {
                warn!("Could not determine OS data directory, logging to ./hashlab.log");
                PathBuf::from("hashlab.log")
            }
        }
    }

    /// Verification policy built from the `jwt` section
    #[must_use]
    pub fn verification_policy(&self) -> VerificationPolicy {
        VerificationPolicy::default()
            .expect_issuers(self.jwt.issuers.iter().cloned())
            .expect_audiences(self.jwt.audiences.iter().cloned())
            .require_claims(self.jwt.required_claims.iter().cloned())
            .with_leeway(chrono::Duration::seconds(i64::from(self.jwt.leeway_seconds)))
    }

    /// Toast lifetime
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Redraw interval, never below 10 ms
    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}
