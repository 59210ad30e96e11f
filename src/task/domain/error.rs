//! Error types for task domain validation and parsing.

use crate::user::domain::UserId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title exceeds 255 characters")]
    TitleTooLong,

    /// A persisted progress value fell outside the valid range.
    #[error("progress {0} outside the 0..=100 range")]
    ProgressOutOfRange(i32),

    /// The owner cannot be added to their own participant set.
    #[error("owner {0} cannot participate in their own task")]
    OwnerCannotParticipate(UserId),

    /// The user is already in the participant set.
    #[error("user {0} already participates in this task")]
    AlreadyParticipant(UserId),

    /// The user is not in the participant set.
    #[error("user {0} is not a participant of this task")]
    NotAParticipant(UserId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
