//! Bounded task progress value.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task completion percentage, always within `0..=100`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    /// No work done.
    pub const ZERO: Self = Self(0);

    /// All work done.
    pub const COMPLETE: Self = Self(100);

    /// Clamps an arbitrary requested value into the valid range.
    #[must_use]
    pub fn clamped(value: i32) -> Self {
        if value <= 0 {
            return Self::ZERO;
        }
        if value >= i32::from(Self::COMPLETE.0) {
            return Self::COMPLETE;
        }
        // The bounds checks above leave value inside u8 range.
        u8::try_from(value).map_or(Self::COMPLETE, Self)
    }

    /// Returns the percentage as an integer.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Progress {
    type Error = TaskDomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let inner =
            u8::try_from(value).map_err(|_| TaskDomainError::ProgressOutOfRange(value))?;
        if inner > Self::COMPLETE.0 {
            return Err(TaskDomainError::ProgressOutOfRange(value));
        }
        Ok(Self(inner))
    }
}

impl From<Progress> for i32 {
    fn from(progress: Progress) -> Self {
        Self::from(progress.0)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
