//! Service layer for label attachment with resolve-or-create semantics.

use super::{TaskServiceError, TaskServiceResult, visible_task};
use crate::label::{
    domain::{Label, LabelId, LabelName},
    ports::{LabelRepository, LabelRepositoryError},
};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
};
use crate::user::domain::UserId;
use mockable::Clock;
use std::sync::Arc;

/// Resolves a label by name, creating it with a palette colour if absent.
///
/// Two requests racing on the same new name both reach the store; the
/// unique constraint picks a winner and the loser re-fetches it here
/// instead of failing.
pub(crate) async fn resolve_or_create<L: LabelRepository>(
    labels: &L,
    name: &str,
    clock: &impl Clock,
) -> TaskServiceResult<Label> {
    let label_name = LabelName::new(name)?;

    if let Some(existing) = labels.find_by_name(&label_name).await? {
        return Ok(existing);
    }

    let label = Label::auto(label_name.clone(), clock);
    match labels.store(&label).await {
        Ok(()) => Ok(label),
        Err(LabelRepositoryError::DuplicateLabelName(_)) => labels
            .find_by_name(&label_name)
            .await?
            .ok_or_else(|| LabelRepositoryError::DuplicateLabelName(label_name).into()),
        Err(err) => Err(err.into()),
    }
}

/// Label attachment orchestration service.
#[derive(Clone)]
pub struct LabelAttachmentService<R, L, C>
where
    R: TaskRepository,
    L: LabelRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    labels: Arc<L>,
    clock: Arc<C>,
}

impl<R, L, C> LabelAttachmentService<R, L, C>
where
    R: TaskRepository,
    L: LabelRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new label attachment service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, labels: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            labels,
            clock,
        }
    }

    /// Attaches a label by name to a task, creating the label if absent.
    ///
    /// Attaching a label that is already on the task is a no-op and
    /// returns the task unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is absent or
    /// not visible, or a label validation/persistence error.
    pub async fn add_label(
        &self,
        task_id: TaskId,
        actor: UserId,
        name: &str,
    ) -> TaskServiceResult<Task> {
        let mut task = visible_task(self.tasks.as_ref(), task_id, actor).await?;
        let label = resolve_or_create(self.labels.as_ref(), name, &*self.clock).await?;

        if task.attach_label(label.id(), &*self.clock) {
            self.tasks.update(&task).await?;
        }
        Ok(task)
    }

    /// Detaches a label from a task.
    ///
    /// A missing task or label is reported as not found; a missing edge
    /// between two existing records is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is absent or
    /// not visible, or [`TaskServiceError::LabelNotFound`] when the label
    /// does not exist.
    pub async fn remove_label(
        &self,
        task_id: TaskId,
        actor: UserId,
        label_id: LabelId,
    ) -> TaskServiceResult<Task> {
        let mut task = visible_task(self.tasks.as_ref(), task_id, actor).await?;
        let label = self
            .labels
            .find_by_id(label_id)
            .await?
            .ok_or(TaskServiceError::LabelNotFound(label_id))?;

        if task.detach_label(label.id(), &*self.clock) {
            self.tasks.update(&task).await?;
        }
        Ok(task)
    }
}
