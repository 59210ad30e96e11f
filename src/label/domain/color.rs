//! Label display colour and the fixed light-colour palette.

use super::LabelDomainError;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed palette of light hues used when a label is auto-created during
/// task attachment.
pub const LIGHT_PALETTE: [&str; 19] = [
    "#FFCDD2", "#F8BBD0", "#E1BEE7", "#D1C4E9", "#C5CAE9", "#BBDEFB", "#B3E5FC", "#B2EBF2",
    "#B2DFDB", "#C8E6C9", "#DCEDC8", "#F0F4C3", "#FFF9C4", "#FFECB3", "#FFE0B2", "#FFCCBC",
    "#D7CCC8", "#F5F5F5", "#CFD8DC",
];

/// Colour assigned to labels created directly without an explicit colour.
const DEFAULT_COLOR: &str = "#FEFBFB";

/// Validated `#RRGGBB` display colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelColor(String);

impl LabelColor {
    /// Creates a validated colour from a `#RRGGBB` hex triplet.
    ///
    /// # Errors
    ///
    /// Returns [`LabelDomainError::InvalidColor`] when the value is not a
    /// `#` followed by exactly six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, LabelDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_uppercase();

        let mut chars = normalized.chars();
        let is_valid = chars.next() == Some('#')
            && normalized.chars().skip(1).count() == 6
            && chars.all(|c| c.is_ascii_hexdigit());

        if !is_valid {
            return Err(LabelDomainError::InvalidColor(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the catalog default colour for directly created labels.
    #[must_use]
    pub fn catalog_default() -> Self {
        Self(DEFAULT_COLOR.to_owned())
    }

    /// Draws an arbitrary colour from the fixed light palette.
    #[must_use]
    pub fn pick_light() -> Self {
        let mut rng = rand::thread_rng();
        let choice = LIGHT_PALETTE.choose(&mut rng).copied().unwrap_or(DEFAULT_COLOR);
        Self(choice.to_owned())
    }

    /// Returns the colour as a `#RRGGBB` string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LabelColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LabelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
