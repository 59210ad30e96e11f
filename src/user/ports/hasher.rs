//! Credential digesting port.

use crate::user::domain::PasswordHash;

/// Produces and verifies stored credential digests.
///
/// The concrete algorithm is an external-collaborator choice; the service
/// layer only requires that `verify` accepts what `hash` produced.
pub trait PasswordHasher: Send + Sync {
    /// Digests a raw password into a storable hash.
    fn hash(&self, password: &str) -> PasswordHash;

    /// Checks a raw password against a stored hash.
    fn verify(&self, password: &str, hash: &PasswordHash) -> bool;
}
