//! Deterministic password digesting.
//!
//! The digest is intentionally unsalted: the same password always yields
//! the same hex digest, matching the value stored at registration. The
//! scheme is a documented weakness carried by the digest contract — see
//! DESIGN.md before changing it, since an upgrade invalidates every
//! stored digest.

use sha2::{Digest, Sha256};

/// Computes and compares deterministic password digests.
#[derive(Debug, Clone, Default)]
pub struct PasswordDigest;

impl PasswordDigest {
    /// Creates a new digest helper.
    pub fn new() -> Self {
        Self
    }

    /// Digest a plaintext password to a fixed-length lowercase hex string.
    pub fn digest(&self, password: &str) -> String {
        let hash = Sha256::digest(password.as_bytes());
        hash.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Verify a plaintext password against a stored digest.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        self.digest(password) == stored
    }
}
