//! Task workflow status.

use super::{ParseTaskStatusError, Progress};
use serde::{Deserialize, Serialize};

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is underway.
    Doing,
    /// Work is complete.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Doing => "DOING",
            Self::Done => "DONE",
        }
    }

    /// Infers the status implied by a progress value.
    ///
    /// Zero means [`Self::Todo`], complete means [`Self::Done`], anything
    /// in between means [`Self::Doing`].
    #[must_use]
    pub fn for_progress(progress: Progress) -> Self {
        if progress == Progress::ZERO {
            Self::Todo
        } else if progress == Progress::COMPLETE {
            Self::Done
        } else {
            Self::Doing
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Todo
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "TODO" => Ok(Self::Todo),
            "DOING" => Ok(Self::Doing),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
