//! Presentation policies shared by every panel

use serde::{Deserialize, Serialize};

/// What a panel shows after a hashing or signing operation fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Keep the last successful output on screen
    #[default]
    Retain,
    /// Blank the output so nothing stale is shown
    Clear,
}

impl FailureMode {
    /// Apply the policy to a displayed output slot
    pub fn on_failure<T>(self, displayed: &mut Option<T>) {
        if self == Self::Clear {
            *displayed = None;
        }
    }
}
