//! Repository port for task persistence, visibility-scoped listing, and
//! label-edge statistics.

use crate::label::domain::LabelId;
use crate::task::domain::{Task, TaskId, TaskStatus};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Filter for visibility-scoped task listings.
///
/// The default filter returns active tasks of any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskListFilter {
    /// Restricts the listing to one workflow status when set.
    pub status: Option<TaskStatus>,
    /// Selects active (`true`) or soft-deleted (`false`) tasks.
    pub is_active: bool,
}

impl Default for TaskListFilter {
    fn default() -> Self {
        Self {
            status: None,
            is_active: true,
        }
    }
}

impl TaskListFilter {
    /// Creates the default filter: active tasks, any status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to one workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Selects soft-deleted instead of active tasks.
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Offset/limit pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of records to skip.
    pub skip: u32,
    /// Maximum number of records to return.
    pub limit: u32,
}

impl Page {
    /// Creates a pagination window.
    #[must_use]
    pub const fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}

/// Task persistence contract.
///
/// The store persists the aggregate including its participant and label
/// edge sets; visibility predicates for listings are pushed down so
/// pagination happens in the store.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task with its edge sets.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (fields, edge sets,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Deletes a task and its edge sets.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Finds a task by internal identifier.
    ///
    /// Returns `None` when the task does not exist. Visibility is the
    /// caller's concern; the store returns the record regardless of actor.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the page of tasks visible to the actor (owned or
    /// participated), matching the filter, ordered by creation time.
    async fn list_visible(
        &self,
        actor: UserId,
        filter: TaskListFilter,
        page: Page,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every label referenced by at least one task, paired with
    /// its task count.
    async fn count_label_usage(&self) -> TaskRepositoryResult<Vec<(LabelId, u64)>>;

    /// Removes a label's edges from every task without touching task
    /// timestamps. Used when the label is deleted from the catalog.
    async fn purge_label(&self, label: LabelId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
