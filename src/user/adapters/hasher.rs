//! Default salted SHA-256 credential hasher.

use crate::user::domain::PasswordHash;
use crate::user::ports::PasswordHasher;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Salt width in bytes before hex rendering.
const SALT_BYTES: usize = 16;

/// Salted SHA-256 implementation of the [`PasswordHasher`] port.
///
/// Stores digests as `salt$digest` with both halves hex-encoded. The salt's
/// hex rendering itself feeds the digest, so verification never needs to
/// decode it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaltedSha256Hasher;

impl SaltedSha256Hasher {
    /// Creates a new hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordHasher for SaltedSha256Hasher {
    fn hash(&self, password: &str) -> PasswordHash {
        let mut salt = [0u8; SALT_BYTES];
        rand::thread_rng().fill(&mut salt);
        let salt_hex = to_hex(&salt);
        let digest = digest_hex(&salt_hex, password);
        PasswordHash::from_parts(&salt_hex, &digest)
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> bool {
        hash.parts()
            .is_some_and(|(salt, digest)| digest_hex(salt, password) == digest)
    }
}

fn digest_hex(salt_hex: &str, password: &str) -> String {
    let digest = Sha256::new()
        .chain_update(salt_hex.as_bytes())
        .chain_update(password.as_bytes())
        .finalize();
    to_hex(&digest)
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
