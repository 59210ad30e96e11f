//! Opaque stored credential digest.

use super::UserDomainError;
use std::fmt;

/// Stored credential digest in `salt$digest` form.
///
/// The domain treats the value as opaque; producing and verifying it is the
/// job of the `PasswordHasher` port. The raw password never reaches the
/// aggregate.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Assembles a hash from its salt and digest halves.
    #[must_use]
    pub fn from_parts(salt: &str, digest: &str) -> Self {
        Self(format!("{salt}${digest}"))
    }

    /// Rehydrates a stored digest from persistence.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::MalformedPasswordHash`] when the value
    /// does not contain the `salt$digest` separator.
    pub fn from_stored(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.split_once('$').is_none() {
            return Err(UserDomainError::MalformedPasswordHash);
        }
        Ok(Self(raw))
    }

    /// Splits the stored value into its salt and digest halves.
    #[must_use]
    pub fn parts(&self) -> Option<(&str, &str)> {
        self.0.split_once('$')
    }

    /// Returns the stored value for persistence.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keeps credential material out of debug output.
impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
