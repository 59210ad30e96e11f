//! Shared error type for the task services.

use crate::errors::ErrorKind;
use crate::label::domain::{LabelDomainError, LabelId};
use crate::label::ports::LabelRepositoryError;
use crate::task::domain::{TaskDomainError, TaskId};
use crate::task::ports::TaskRepositoryError;
use crate::user::ports::UserRepositoryError;
use std::fmt;
use thiserror::Error;

/// Owner-only action named in denial messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerOnlyAction {
    /// Inviting or removing participants.
    ManageParticipants,
    /// Hard-deleting the task.
    Delete,
    /// Soft-deleting the task.
    Deactivate,
    /// Restoring a soft-deleted task.
    Activate,
}

impl fmt::Display for OwnerOnlyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Self::ManageParticipants => "manage participants",
            Self::Delete => "delete the task",
            Self::Deactivate => "deactivate the task",
            Self::Activate => "activate the task",
        };
        f.write_str(action)
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The task is absent or not visible to the actor; the two cases are
    /// deliberately conflated.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task is visible but the action is reserved for the owner.
    #[error("only the owner may {0}")]
    OwnerOnly(OwnerOnlyAction),

    /// No registered account matches the invited email address.
    #[error("no user registered for {0}")]
    UnknownParticipant(String),

    /// The referenced label does not exist.
    #[error("label not found: {0}")]
    LabelNotFound(LabelId),

    /// Task domain validation or membership rule failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Label name validation failed.
    #[error(transparent)]
    LabelDomain(#[from] LabelDomainError),

    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Label repository operation failed.
    #[error(transparent)]
    Labels(#[from] LabelRepositoryError),

    /// User repository operation failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

impl TaskServiceError {
    /// Returns the boundary-facing failure kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_)
            | Self::UnknownParticipant(_)
            | Self::LabelNotFound(_)
            | Self::Tasks(TaskRepositoryError::NotFound(_))
            | Self::Labels(LabelRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::OwnerOnly(_) => ErrorKind::Forbidden,
            Self::Domain(
                TaskDomainError::OwnerCannotParticipate(_)
                | TaskDomainError::AlreadyParticipant(_)
                | TaskDomainError::NotAParticipant(_),
            )
            | Self::Tasks(TaskRepositoryError::DuplicateTask(_))
            | Self::Labels(
                LabelRepositoryError::DuplicateLabelName(_) | LabelRepositoryError::DuplicateLabel(_),
            )
            | Self::Users(
                UserRepositoryError::DuplicateEmail(_) | UserRepositoryError::DuplicateUser(_),
            ) => ErrorKind::Conflict,
            Self::Domain(
                TaskDomainError::EmptyTitle
                | TaskDomainError::TitleTooLong
                | TaskDomainError::ProgressOutOfRange(_),
            )
            | Self::LabelDomain(_) => ErrorKind::Invalid,
            Self::Tasks(TaskRepositoryError::Persistence(_))
            | Self::Labels(LabelRepositoryError::Persistence(_))
            | Self::Users(UserRepositoryError::Persistence(_)) => ErrorKind::Internal,
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
