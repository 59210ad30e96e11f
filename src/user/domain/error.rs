//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing domain user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The email address does not have a plausible `local@domain` shape.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The stored credential digest is not in the expected format.
    #[error("malformed password hash")]
    MalformedPasswordHash,
}
