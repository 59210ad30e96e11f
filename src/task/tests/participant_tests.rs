//! Service orchestration tests for participant membership.

use std::sync::Arc;

use crate::errors::ErrorKind;
use crate::label::adapters::memory::InMemoryLabelRepository;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDomainError, TaskPatch, TaskStatus},
    services::{
        CreateTaskRequest, ParticipantService, TaskLifecycleService, TaskServiceError,
    },
};
use crate::user::{
    adapters::{SaltedSha256Hasher, memory::InMemoryUserRepository},
    domain::User,
    services::{RegisterUserRequest, UserAccountService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

struct Board {
    lifecycle: TaskLifecycleService<InMemoryTaskRepository, InMemoryLabelRepository, DefaultClock>,
    participants: ParticipantService<InMemoryTaskRepository, InMemoryUserRepository, DefaultClock>,
    accounts: UserAccountService<InMemoryUserRepository, SaltedSha256Hasher>,
}

#[fixture]
fn board() -> Board {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let labels = Arc::new(InMemoryLabelRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let clock = Arc::new(DefaultClock);

    Board {
        lifecycle: TaskLifecycleService::new(
            Arc::clone(&tasks),
            labels,
            Arc::clone(&clock),
        ),
        participants: ParticipantService::new(Arc::clone(&tasks), Arc::clone(&users), clock),
        accounts: UserAccountService::new(users, Arc::new(SaltedSha256Hasher::new())),
    }
}

async fn register(board: &Board, email: &str) -> User {
    board
        .accounts
        .register(RegisterUserRequest::new(email, "Kim", "Doe", "hunter2!"))
        .await
        .expect("registration should succeed")
}

async fn shared_task(board: &Board) -> (User, User, Task) {
    let owner = register(board, "owner@example.com").await;
    let invitee = register(board, "invitee@example.com").await;
    let task = board
        .lifecycle
        .create(owner.id(), CreateTaskRequest::new("Shared work"))
        .await
        .expect("task creation should succeed");
    (owner, invitee, task)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owner_invites_registered_user(board: Board) {
    let (owner, invitee, task) = shared_task(&board).await;

    let task = board
        .participants
        .add_participant(task.id(), owner.id(), invitee.email().as_str())
        .await
        .expect("invitation should succeed");

    assert!(task.participants().contains(&invitee.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reinviting_a_participant_is_a_conflict(board: Board) {
    let (owner, invitee, task) = shared_task(&board).await;
    board
        .participants
        .add_participant(task.id(), owner.id(), invitee.email().as_str())
        .await
        .expect("invitation should succeed");

    let result = board
        .participants
        .add_participant(task.id(), owner.id(), invitee.email().as_str())
        .await;

    let Err(err) = result else {
        panic!("duplicate invitation must fail");
    };
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(matches!(
        err,
        TaskServiceError::Domain(TaskDomainError::AlreadyParticipant(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inviting_the_owner_is_rejected(board: Board) {
    let (owner, _, task) = shared_task(&board).await;

    let result = board
        .participants
        .add_participant(task.id(), owner.id(), owner.email().as_str())
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Domain(
            TaskDomainError::OwnerCannotParticipate(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inviting_an_unknown_email_reports_not_found(board: Board) {
    let (owner, _, task) = shared_task(&board).await;

    let result = board
        .participants
        .add_participant(task.id(), owner.id(), "ghost@example.com")
        .await;

    let Err(err) = result else {
        panic!("unknown invitee must fail");
    };
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(err, TaskServiceError::UnknownParticipant(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn participants_cannot_manage_membership(board: Board) {
    let (owner, invitee, task) = shared_task(&board).await;
    let third = register(&board, "third@example.com").await;
    board
        .participants
        .add_participant(task.id(), owner.id(), invitee.email().as_str())
        .await
        .expect("invitation should succeed");

    let add = board
        .participants
        .add_participant(task.id(), invitee.id(), third.email().as_str())
        .await;
    let Err(err) = add else {
        panic!("participant-initiated invite must fail");
    };
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let remove = board
        .participants
        .remove_participant(task.id(), invitee.id(), invitee.id())
        .await;
    assert!(matches!(remove, Err(TaskServiceError::OwnerOnly(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn participants_can_edit_but_not_delete(board: Board) {
    let (owner, invitee, task) = shared_task(&board).await;
    board
        .participants
        .add_participant(task.id(), owner.id(), invitee.email().as_str())
        .await
        .expect("invitation should succeed");

    let updated = board
        .lifecycle
        .update(
            task.id(),
            invitee.id(),
            TaskPatch::new().with_status(TaskStatus::Doing).with_progress(40),
        )
        .await
        .expect("participant edit should succeed");
    assert_eq!(updated.status(), TaskStatus::Doing);
    assert_eq!(updated.progress().value(), 40);

    let delete = board.lifecycle.delete(task.id(), invitee.id()).await;
    let Err(err) = delete else {
        panic!("participant delete must fail");
    };
    assert_eq!(err.kind(), ErrorKind::Forbidden);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owner_removes_a_participant(board: Board) {
    let (owner, invitee, task) = shared_task(&board).await;
    board
        .participants
        .add_participant(task.id(), owner.id(), invitee.email().as_str())
        .await
        .expect("invitation should succeed");

    let task = board
        .participants
        .remove_participant(task.id(), owner.id(), invitee.id())
        .await
        .expect("removal should succeed");

    assert!(task.participants().is_empty());

    let lookup = board.lifecycle.get(task.id(), invitee.id()).await;
    assert!(matches!(lookup, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removing_a_non_participant_is_a_conflict(board: Board) {
    let (owner, invitee, task) = shared_task(&board).await;

    let result = board
        .participants
        .remove_participant(task.id(), owner.id(), invitee.id())
        .await;

    let Err(err) = result else {
        panic!("removal of a non-participant must fail");
    };
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(matches!(
        err,
        TaskServiceError::Domain(TaskDomainError::NotAParticipant(_))
    ));
}
