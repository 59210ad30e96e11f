//! Service layer for task creation, update, listing, and deletion.

use super::{OwnerOnlyAction, TaskServiceError, TaskServiceResult, labels, visible_task};
use crate::label::ports::LabelRepository;
use crate::task::{
    domain::{NewTaskData, Task, TaskId, TaskPatch, TaskStatus},
    ports::{Page, TaskListFilter, TaskRepository},
};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    progress: Option<i32>,
    due_date: Option<DateTime<Utc>>,
    label_names: Vec<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title; the status defaults to
    /// [`TaskStatus::Todo`].
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            progress: None,
            due_date: None,
            label_names: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the requested workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the requested progress percentage.
    #[must_use]
    pub const fn with_progress(mut self, progress: i32) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the initial label names, resolved or created at creation time.
    #[must_use]
    pub fn with_labels(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.label_names = names.into_iter().collect();
        self
    }
}

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, L, C>
where
    R: TaskRepository,
    L: LabelRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    labels: Arc<L>,
    clock: Arc<C>,
}

impl<R, L, C> TaskLifecycleService<R, L, C>
where
    R: TaskRepository,
    L: LabelRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, labels: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            labels,
            clock,
        }
    }

    /// Creates a task for the owner, reconciling status and progress and
    /// resolving initial label names.
    ///
    /// The task row commits before labels are attached; a crash between
    /// the two steps leaves the task briefly without its labels.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when validation fails or persistence
    /// rejects a step.
    pub async fn create(
        &self,
        owner: UserId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            status,
            progress,
            due_date,
            label_names,
        } = request;

        let mut task = Task::new(
            NewTaskData {
                owner,
                title,
                description,
                status,
                requested_progress: progress,
                due_date,
            },
            &*self.clock,
        )?;
        self.tasks.store(&task).await?;

        if !label_names.is_empty() {
            for name in label_names {
                let label =
                    labels::resolve_or_create(self.labels.as_ref(), &name, &*self.clock).await?;
                task.attach_label(label.id(), &*self.clock);
            }
            self.tasks.update(&task).await?;
        }

        Ok(task)
    }

    /// Retrieves a task visible to the actor.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is absent or
    /// not visible.
    pub async fn get(&self, id: TaskId, actor: UserId) -> TaskServiceResult<Task> {
        visible_task(self.tasks.as_ref(), id, actor).await
    }

    /// Lists tasks visible to the actor, filtered and paginated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Tasks`] when persistence lookup fails.
    pub async fn list(
        &self,
        actor: UserId,
        filter: TaskListFilter,
        page: Page,
    ) -> TaskServiceResult<Vec<Task>> {
        Ok(self.tasks.list_visible(actor, filter, page).await?)
    }

    /// Applies a partial update to a task visible to the actor.
    ///
    /// Status and progress run through the reconciliation rule; other
    /// supplied fields are applied verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is absent or
    /// not visible, or a validation error when the patch is rejected.
    pub async fn update(
        &self,
        id: TaskId,
        actor: UserId,
        patch: TaskPatch,
    ) -> TaskServiceResult<Task> {
        let mut task = visible_task(self.tasks.as_ref(), id, actor).await?;
        task.apply(patch, &*self.clock)?;
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Hard-deletes a task; owner only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is absent or
    /// not visible, or [`TaskServiceError::OwnerOnly`] when the actor is a
    /// participant.
    pub async fn delete(&self, id: TaskId, actor: UserId) -> TaskServiceResult<Task> {
        let task = self.owned_task(id, actor, OwnerOnlyAction::Delete).await?;
        self.tasks.delete(task.id()).await?;
        Ok(task)
    }

    /// Restores a soft-deleted task; owner only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is absent or
    /// not visible, or [`TaskServiceError::OwnerOnly`] when the actor is a
    /// participant.
    pub async fn activate(&self, id: TaskId, actor: UserId) -> TaskServiceResult<Task> {
        let mut task = self.owned_task(id, actor, OwnerOnlyAction::Activate).await?;
        task.activate(&*self.clock);
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Soft-deletes a task; owner only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is absent or
    /// not visible, or [`TaskServiceError::OwnerOnly`] when the actor is a
    /// participant.
    pub async fn deactivate(&self, id: TaskId, actor: UserId) -> TaskServiceResult<Task> {
        let mut task = self
            .owned_task(id, actor, OwnerOnlyAction::Deactivate)
            .await?;
        task.deactivate(&*self.clock);
        self.tasks.update(&task).await?;
        Ok(task)
    }

    async fn owned_task(
        &self,
        id: TaskId,
        actor: UserId,
        action: OwnerOnlyAction,
    ) -> TaskServiceResult<Task> {
        let task = visible_task(self.tasks.as_ref(), id, actor).await?;
        if !task.is_owned_by(actor) {
            return Err(TaskServiceError::OwnerOnly(action));
        }
        Ok(task)
    }
}
