//! Key identifiers

use sha2::{Digest, Sha256};

/// First 8 bytes of SHA-256 over the SPKI bytes, hex encoded
#[must_use]
pub fn fingerprint(public_der: &[u8]) -> String {
    let digest = Sha256::digest(public_der);
    hex::encode(&digest[..8])
}
