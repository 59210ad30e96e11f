//! Task aggregate root and related types.

use super::{Progress, TaskDomainError, TaskId, TaskPatch, TaskStatus, reconcile};
use crate::label::domain::LabelId;
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Maximum length for a task title, matching the `VARCHAR(255)` column.
const MAX_TITLE_LENGTH: usize = 255;

/// Validated, trimmed task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty
    /// after trimming, or [`TaskDomainError::TitleTooLong`] when it exceeds
    /// 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        if trimmed.len() > MAX_TITLE_LENGTH {
            return Err(TaskDomainError::TitleTooLong);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task aggregate root.
///
/// Owns the participant and label membership sets; membership checks run
/// before any mutation, so the sets never hold duplicates. The owner is
/// immutable after creation and never appears in the participant set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    progress: Progress,
    is_active: bool,
    due_date: Option<DateTime<Utc>>,
    owner: UserId,
    participants: BTreeSet<UserId>,
    labels: BTreeSet<LabelId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a new task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Owner of the new task.
    pub owner: UserId,
    /// Raw title, validated during construction.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Requested workflow status.
    pub status: TaskStatus,
    /// Requested progress, reconciled against the status.
    pub requested_progress: Option<i32>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted progress percentage.
    pub progress: Progress,
    /// Persisted visibility flag.
    pub is_active: bool,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted owner.
    pub owner: UserId,
    /// Persisted participant set.
    pub participants: BTreeSet<UserId>,
    /// Persisted label set.
    pub labels: BTreeSet<LabelId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new active task, reconciling status and progress.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::TitleTooLong`] when the title fails validation.
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let title = TaskTitle::new(data.title)?;
        let (status, progress) = reconcile::on_create(data.status, data.requested_progress);
        let timestamp = clock.utc();

        Ok(Self {
            id: TaskId::new(),
            title,
            description: data.description,
            status,
            progress,
            is_active: true,
            due_date: data.due_date,
            owner: data.owner,
            participants: BTreeSet::new(),
            labels: BTreeSet::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            progress: data.progress,
            is_active: data.is_active,
            due_date: data.due_date,
            owner: data.owner,
            participants: data.participants,
            labels: data.labels,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the progress percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns `true` unless the task has been soft-deleted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the owner.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the participant set.
    #[must_use]
    pub const fn participants(&self) -> &BTreeSet<UserId> {
        &self.participants
    }

    /// Returns the attached label set.
    #[must_use]
    pub const fn labels(&self) -> &BTreeSet<LabelId> {
        &self.labels
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the user owns this task.
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner == user
    }

    /// Returns `true` when the user may view and edit this task.
    ///
    /// Visibility extends to the owner and every participant; to anyone
    /// else the task is indistinguishable from a non-existent one.
    #[must_use]
    pub fn is_visible_to(&self, user: UserId) -> bool {
        self.is_owned_by(user) || self.participants.contains(&user)
    }

    /// Applies a partial update, reconciling status and progress.
    ///
    /// # Errors
    ///
    /// Returns a title validation error when the patch carries an invalid
    /// title; other fields cannot fail.
    pub fn apply(&mut self, patch: TaskPatch, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let TaskPatch {
            title,
            description,
            status,
            progress,
            due_date,
        } = patch;

        if let Some(value) = title {
            self.title = TaskTitle::new(value)?;
        }
        if let Some(value) = description {
            self.description = Some(value);
        }
        if let Some(value) = due_date {
            self.due_date = Some(value);
        }

        let (next_status, next_progress) =
            reconcile::on_update(self.status, self.progress, status, progress);
        self.status = next_status;
        self.progress = next_progress;

        self.touch(clock);
        Ok(())
    }

    /// Adds a user to the participant set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::OwnerCannotParticipate`] when the user is
    /// the owner, or [`TaskDomainError::AlreadyParticipant`] when the user
    /// is already in the set.
    pub fn add_participant(
        &mut self,
        user: UserId,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if self.is_owned_by(user) {
            return Err(TaskDomainError::OwnerCannotParticipate(user));
        }
        if self.participants.contains(&user) {
            return Err(TaskDomainError::AlreadyParticipant(user));
        }
        self.participants.insert(user);
        self.touch(clock);
        Ok(())
    }

    /// Removes a user from the participant set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotAParticipant`] when the user is not in
    /// the set.
    pub fn remove_participant(
        &mut self,
        user: UserId,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.participants.remove(&user) {
            return Err(TaskDomainError::NotAParticipant(user));
        }
        self.touch(clock);
        Ok(())
    }

    /// Attaches a label, returning `true` when the edge is new.
    ///
    /// Attaching an already-attached label is a no-op.
    pub fn attach_label(&mut self, label: LabelId, clock: &impl Clock) -> bool {
        let added = self.labels.insert(label);
        if added {
            self.touch(clock);
        }
        added
    }

    /// Detaches a label, returning `true` when an edge was removed.
    ///
    /// Detaching an absent label is a no-op.
    pub fn detach_label(&mut self, label: LabelId, clock: &impl Clock) -> bool {
        let removed = self.labels.remove(&label);
        if removed {
            self.touch(clock);
        }
        removed
    }

    /// Drops a label edge without touching timestamps.
    ///
    /// Storage-level cleanup used when a label is deleted from the catalog.
    pub(crate) fn purge_label(&mut self, label: LabelId) -> bool {
        self.labels.remove(&label)
    }

    /// Restores the task to the active (visible) state.
    pub fn activate(&mut self, clock: &impl Clock) {
        self.is_active = true;
        self.touch(clock);
    }

    /// Soft-deletes the task, hiding it from default listings.
    pub fn deactivate(&mut self, clock: &impl Clock) {
        self.is_active = false;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
