//! Service orchestration tests for the task lifecycle.

use std::sync::Arc;

use crate::label::adapters::memory::InMemoryLabelRepository;
use crate::label::domain::LIGHT_PALETTE;
use crate::label::ports::repository::LabelRepository;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Progress, TaskId, TaskPatch, TaskStatus},
    ports::{Page, TaskListFilter},
    services::{CreateTaskRequest, TaskLifecycleService, TaskServiceError},
};
use crate::user::domain::UserId;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryLabelRepository, DefaultClock>;

struct Board {
    service: TestService,
    labels: Arc<InMemoryLabelRepository>,
    owner: UserId,
}

#[fixture]
fn board() -> Board {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let labels = Arc::new(InMemoryLabelRepository::new());
    let service = TaskLifecycleService::new(tasks, Arc::clone(&labels), Arc::new(DefaultClock));
    Board {
        service,
        labels,
        owner: UserId::new(),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_defaults_yields_todo_at_zero(board: Board) {
    let task = board
        .service
        .create(board.owner, CreateTaskRequest::new("T"))
        .await
        .expect("task creation should succeed");

    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.progress(), Progress::ZERO);

    let fetched = board
        .service
        .get(task.id(), board.owner)
        .await
        .expect("owner lookup should succeed");
    assert_eq!(fetched, task);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn progress_then_status_updates_reconcile(board: Board) {
    let task = board
        .service
        .create(board.owner, CreateTaskRequest::new("T"))
        .await
        .expect("task creation should succeed");

    let task = board
        .service
        .update(task.id(), board.owner, TaskPatch::new().with_progress(75))
        .await
        .expect("progress update should succeed");
    assert_eq!(task.status(), TaskStatus::Doing);
    assert_eq!(task.progress().value(), 75);

    let task = board
        .service
        .update(
            task.id(),
            board.owner,
            TaskPatch::new().with_status(TaskStatus::Done),
        )
        .await
        .expect("status update should succeed");
    assert_eq!(task.status(), TaskStatus::Done);
    assert_eq!(task.progress(), Progress::COMPLETE);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_label_names_creates_palette_labels(board: Board) {
    let request = CreateTaskRequest::new("Plan sprint")
        .with_labels(vec!["Urgent".to_owned(), "Work".to_owned()]);

    let task = board
        .service
        .create(board.owner, request)
        .await
        .expect("task creation should succeed");

    assert_eq!(task.labels().len(), 2);
    let labels = board
        .labels
        .list_all()
        .await
        .expect("label listing should succeed");
    assert_eq!(labels.len(), 2);
    for label in labels {
        assert!(task.labels().contains(&label.id()));
        assert!(LIGHT_PALETTE.contains(&label.color().as_str()));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stranger_sees_not_found_for_get_update_delete(board: Board) {
    let stranger = UserId::new();
    let task = board
        .service
        .create(board.owner, CreateTaskRequest::new("Private"))
        .await
        .expect("task creation should succeed");

    let get = board.service.get(task.id(), stranger).await;
    assert!(matches!(get, Err(TaskServiceError::NotFound(_))));

    let update = board
        .service
        .update(task.id(), stranger, TaskPatch::new().with_progress(10))
        .await;
    assert!(matches!(update, Err(TaskServiceError::NotFound(_))));

    let delete = board.service.delete(task.id(), stranger).await;
    assert!(matches!(delete, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_task_reports_not_found(board: Board) {
    let result = board.service.get(TaskId::new(), board.owner).await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_filters_by_status_and_paginates(board: Board) {
    for index in 0..3 {
        board
            .service
            .create(board.owner, CreateTaskRequest::new(format!("todo-{index}")))
            .await
            .expect("task creation should succeed");
    }
    board
        .service
        .create(
            board.owner,
            CreateTaskRequest::new("active work")
                .with_status(TaskStatus::Doing)
                .with_progress(30),
        )
        .await
        .expect("task creation should succeed");

    let all = board
        .service
        .list(board.owner, TaskListFilter::new(), Page::default())
        .await
        .expect("listing should succeed");
    assert_eq!(all.len(), 4);

    let doing = board
        .service
        .list(
            board.owner,
            TaskListFilter::new().with_status(TaskStatus::Doing),
            Page::default(),
        )
        .await
        .expect("filtered listing should succeed");
    assert_eq!(doing.len(), 1);
    assert_eq!(doing.first().map(|task| task.status()), Some(TaskStatus::Doing));

    let second_page = board
        .service
        .list(board.owner, TaskListFilter::new(), Page::new(2, 10))
        .await
        .expect("paginated listing should succeed");
    assert_eq!(second_page.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deactivated_tasks_leave_the_default_listing(board: Board) {
    let task = board
        .service
        .create(board.owner, CreateTaskRequest::new("Old plan"))
        .await
        .expect("task creation should succeed");

    let task = board
        .service
        .deactivate(task.id(), board.owner)
        .await
        .expect("deactivation should succeed");
    assert!(!task.is_active());

    let active = board
        .service
        .list(board.owner, TaskListFilter::new(), Page::default())
        .await
        .expect("listing should succeed");
    assert!(active.is_empty());

    let inactive = board
        .service
        .list(board.owner, TaskListFilter::new().inactive(), Page::default())
        .await
        .expect("inactive listing should succeed");
    assert_eq!(inactive.len(), 1);

    let task = board
        .service
        .activate(task.id(), board.owner)
        .await
        .expect("activation should succeed");
    assert!(task.is_active());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task(board: Board) {
    let task = board
        .service
        .create(board.owner, CreateTaskRequest::new("Scrap me"))
        .await
        .expect("task creation should succeed");

    board
        .service
        .delete(task.id(), board.owner)
        .await
        .expect("owner delete should succeed");

    let result = board.service.get(task.id(), board.owner).await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_is_rejected_on_create(board: Board) {
    let result = board
        .service
        .create(board.owner, CreateTaskRequest::new("   "))
        .await;

    assert!(matches!(result, Err(TaskServiceError::Domain(_))));
}
