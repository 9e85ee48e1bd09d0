//! Process-wide signing key pair
//!
//! The pair is generated lazily, exactly once, even under concurrent first
//! access. A failed attempt stores nothing, so a later call can retry.

use crate::{Curve, KeyPair, Result};
use once_cell::sync::{Lazy, OnceCell};
use std::sync::Arc;

static GLOBAL: Lazy<KeyProvisioner> = Lazy::new(|| KeyProvisioner::new(Curve::P256));

/// Init-once holder for a [`KeyPair`]
#[derive(Debug)]
pub struct KeyProvisioner {
    curve: Curve,
    cell: OnceCell<Arc<KeyPair>>,
}

impl KeyProvisioner {
    /// A provisioner that will generate on `curve`
    #[must_use]
    pub fn new(curve: Curve) -> Self {
        Self {
            curve,
            cell: OnceCell::new(),
        }
    }

    /// The shared P-256 provisioner used by the playground
    #[must_use]
    pub fn global() -> &'static KeyProvisioner {
        &GLOBAL
    }

    /// The key pair, generating it on first call
    ///
    /// # Errors
    ///
    /// Returns the generation error; nothing is cached in that case.
    pub fn key_pair(&self) -> Result<Arc<KeyPair>> {
        self.cell
            .get_or_try_init(|| {
                tracing::debug!(curve = %self.curve, "provisioning key pair");
                KeyPair::generate(self.curve).map(Arc::new)
            })
            .cloned()
    }

    /// The key pair if it has already been provisioned
    #[must_use]
    pub fn get(&self) -> Option<Arc<KeyPair>> {
        self.cell.get().cloned()
    }
}
