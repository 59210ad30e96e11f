//! Application services for task orchestration.
//!
//! Three services share one error type and the visibility guard:
//! [`TaskLifecycleService`] for create/update/list/delete,
//! [`ParticipantService`] for owner-managed membership, and
//! [`LabelAttachmentService`] for resolve-or-create label association.

mod error;
mod labels;
mod lifecycle;
mod participants;

pub use error::{OwnerOnlyAction, TaskServiceError, TaskServiceResult};
pub use labels::LabelAttachmentService;
pub use lifecycle::{CreateTaskRequest, TaskLifecycleService};
pub use participants::ParticipantService;

use crate::task::domain::{Task, TaskId};
use crate::task::ports::TaskRepository;
use crate::user::domain::UserId;

/// Fetches a task and applies the visibility guard.
///
/// A task that exists but is not visible to the actor is reported as
/// [`TaskServiceError::NotFound`], indistinguishable from a missing one.
pub(crate) async fn visible_task<R: TaskRepository>(
    tasks: &R,
    id: TaskId,
    actor: UserId,
) -> TaskServiceResult<Task> {
    tasks
        .find_by_id(id)
        .await?
        .filter(|task| task.is_visible_to(actor))
        .ok_or(TaskServiceError::NotFound(id))
}
