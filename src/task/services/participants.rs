//! Service layer for owner-managed participant membership.

use super::{OwnerOnlyAction, TaskServiceError, TaskServiceResult, visible_task};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
};
use crate::user::{
    domain::{EmailAddress, UserId},
    ports::UserRepository,
};
use mockable::Clock;
use std::sync::Arc;

/// Participant membership orchestration service.
///
/// Both operations are owner-only; participants can edit a task but never
/// reshape who may see it.
#[derive(Clone)]
pub struct ParticipantService<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<R, U, C> ParticipantService<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new participant service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users,
            clock,
        }
    }

    /// Invites a registered user onto a task by email address.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is absent or
    /// not visible, [`TaskServiceError::OwnerOnly`] when the actor is not
    /// the owner, [`TaskServiceError::UnknownParticipant`] when no account
    /// matches the address, and a domain conflict when the target already
    /// participates or is the owner.
    pub async fn add_participant(
        &self,
        task_id: TaskId,
        actor: UserId,
        email: &str,
    ) -> TaskServiceResult<Task> {
        let mut task = self.owned_task(task_id, actor).await?;

        // An address that cannot parse trivially has no account behind it.
        let address = EmailAddress::new(email)
            .map_err(|_| TaskServiceError::UnknownParticipant(email.to_owned()))?;
        let user = self
            .users
            .find_by_email(&address)
            .await?
            .ok_or_else(|| TaskServiceError::UnknownParticipant(address.to_string()))?;

        task.add_participant(user.id(), &*self.clock)?;
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Removes a participant from a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is absent or
    /// not visible, [`TaskServiceError::OwnerOnly`] when the actor is not
    /// the owner, and a domain conflict when the target is not currently a
    /// participant.
    pub async fn remove_participant(
        &self,
        task_id: TaskId,
        actor: UserId,
        participant: UserId,
    ) -> TaskServiceResult<Task> {
        let mut task = self.owned_task(task_id, actor).await?;
        task.remove_participant(participant, &*self.clock)?;
        self.tasks.update(&task).await?;
        Ok(task)
    }

    async fn owned_task(&self, id: TaskId, actor: UserId) -> TaskServiceResult<Task> {
        let task = visible_task(self.tasks.as_ref(), id, actor).await?;
        if !task.is_owned_by(actor) {
            return Err(TaskServiceError::OwnerOnly(
                OwnerOnlyAction::ManageParticipants,
            ));
        }
        Ok(task)
    }
}
