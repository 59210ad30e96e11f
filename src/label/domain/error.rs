//! Error types for label domain validation.

use thiserror::Error;

/// Errors returned while constructing domain label values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LabelDomainError {
    /// The label name is empty after trimming.
    #[error("label name must not be empty")]
    EmptyLabelName,

    /// The label name exceeds the persisted column width.
    #[error("label name '{0}' exceeds 255 characters")]
    LabelNameTooLong(String),

    /// The colour value is not a `#RRGGBB` hex triplet.
    #[error("invalid label colour '{0}', expected #RRGGBB")]
    InvalidColor(String),
}
