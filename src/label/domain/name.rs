//! Validated label name type.

use super::LabelDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a label name, matching the `VARCHAR(255)` column.
const MAX_NAME_LENGTH: usize = 255;

/// Validated, case-sensitive label name.
///
/// Names are trimmed but otherwise stored as given; lookup is a
/// case-sensitive exact match, so `Urgent` and `urgent` are distinct labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelName(String);

impl LabelName {
    /// Creates a validated label name.
    ///
    /// # Errors
    ///
    /// Returns [`LabelDomainError::EmptyLabelName`] when the value is empty
    /// after trimming, or [`LabelDomainError::LabelNameTooLong`] when it
    /// exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, LabelDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(LabelDomainError::EmptyLabelName);
        }

        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(LabelDomainError::LabelNameTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LabelName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LabelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
