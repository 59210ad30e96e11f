//! Service orchestration tests for label attachment.

use std::sync::Arc;

use crate::errors::ErrorKind;
use crate::label::{
    adapters::memory::InMemoryLabelRepository,
    domain::{LIGHT_PALETTE, Label, LabelId, LabelName},
    ports::{LabelRepository, LabelRepositoryError, LabelRepositoryResult},
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTaskData, Task, TaskId, TaskStatus},
    ports::{Page, TaskListFilter, TaskRepository, TaskRepositoryResult},
    services::{CreateTaskRequest, LabelAttachmentService, TaskLifecycleService, TaskServiceError},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestLifecycle =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryLabelRepository, DefaultClock>;
type TestAttachment =
    LabelAttachmentService<InMemoryTaskRepository, InMemoryLabelRepository, DefaultClock>;

struct Board {
    lifecycle: TestLifecycle,
    attachment: TestAttachment,
    labels: Arc<InMemoryLabelRepository>,
    owner: UserId,
}

#[fixture]
fn board() -> Board {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let labels = Arc::new(InMemoryLabelRepository::new());
    let clock = Arc::new(DefaultClock);

    Board {
        lifecycle: TaskLifecycleService::new(
            Arc::clone(&tasks),
            Arc::clone(&labels),
            Arc::clone(&clock),
        ),
        attachment: LabelAttachmentService::new(tasks, Arc::clone(&labels), clock),
        labels,
        owner: UserId::new(),
    }
}

async fn blank_task(board: &Board) -> Task {
    board
        .lifecycle
        .create(board.owner, CreateTaskRequest::new("Label target"))
        .await
        .expect("task creation should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn attaching_a_new_name_creates_a_palette_label(board: Board) {
    let task = blank_task(&board).await;

    let task = board
        .attachment
        .add_label(task.id(), board.owner, "Urgent")
        .await
        .expect("attachment should succeed");

    assert_eq!(task.labels().len(), 1);
    let name = LabelName::new("Urgent").expect("valid label name");
    let label = board
        .labels
        .find_by_name(&name)
        .await
        .expect("lookup should succeed")
        .expect("label should have been created");
    assert!(task.labels().contains(&label.id()));
    assert!(LIGHT_PALETTE.contains(&label.color().as_str()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn attaching_the_same_name_twice_keeps_one_edge(board: Board) {
    let task = blank_task(&board).await;

    board
        .attachment
        .add_label(task.id(), board.owner, "Urgent")
        .await
        .expect("first attachment should succeed");
    let task = board
        .attachment
        .add_label(task.id(), board.owner, "Urgent")
        .await
        .expect("second attachment should succeed");

    assert_eq!(task.labels().len(), 1);
    let labels = board
        .labels
        .list_all()
        .await
        .expect("label listing should succeed");
    assert_eq!(labels.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_tasks_share_one_resolved_label(board: Board) {
    let first = blank_task(&board).await;
    let second = blank_task(&board).await;

    let first = board
        .attachment
        .add_label(first.id(), board.owner, "Work")
        .await
        .expect("first attachment should succeed");
    let second = board
        .attachment
        .add_label(second.id(), board.owner, "Work")
        .await
        .expect("second attachment should succeed");

    assert_eq!(first.labels(), second.labels());
    let labels = board
        .labels
        .list_all()
        .await
        .expect("label listing should succeed");
    assert_eq!(labels.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn detaching_removes_the_edge_and_tolerates_absence(board: Board) {
    let task = blank_task(&board).await;
    let task = board
        .attachment
        .add_label(task.id(), board.owner, "Urgent")
        .await
        .expect("attachment should succeed");
    let label_id = task
        .labels()
        .iter()
        .next()
        .copied()
        .expect("one label expected");

    let task = board
        .attachment
        .remove_label(task.id(), board.owner, label_id)
        .await
        .expect("detachment should succeed");
    assert!(task.labels().is_empty());

    // The label still exists, only the edge is gone; detaching again is a
    // silent no-op.
    let task = board
        .attachment
        .remove_label(task.id(), board.owner, label_id)
        .await
        .expect("repeat detachment should be silent");
    assert!(task.labels().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn detaching_an_unknown_label_reports_not_found(board: Board) {
    let task = blank_task(&board).await;

    let result = board
        .attachment
        .remove_label(task.id(), board.owner, LabelId::new())
        .await;

    let Err(err) = result else {
        panic!("unknown label must fail");
    };
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(err, TaskServiceError::LabelNotFound(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn strangers_cannot_attach_labels(board: Board) {
    let task = blank_task(&board).await;

    let result = board
        .attachment
        .add_label(task.id(), UserId::new(), "Sneaky")
        .await;

    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_label_name_is_rejected(board: Board) {
    let task = blank_task(&board).await;

    let result = board
        .attachment
        .add_label(task.id(), board.owner, "   ")
        .await;

    let Err(err) = result else {
        panic!("blank label name must fail");
    };
    assert_eq!(err.kind(), ErrorKind::Invalid);
}

mockall::mock! {
    Labels {}

    #[async_trait]
    impl LabelRepository for Labels {
        async fn store(&self, label: &Label) -> LabelRepositoryResult<()>;
        async fn update(&self, label: &Label) -> LabelRepositoryResult<()>;
        async fn delete(&self, id: LabelId) -> LabelRepositoryResult<()>;
        async fn find_by_id(&self, id: LabelId) -> LabelRepositoryResult<Option<Label>>;
        async fn find_by_name(&self, name: &LabelName) -> LabelRepositoryResult<Option<Label>>;
        async fn list(&self, skip: u32, limit: u32) -> LabelRepositoryResult<Vec<Label>>;
        async fn list_all(&self) -> LabelRepositoryResult<Vec<Label>>;
    }
}

mockall::mock! {
    Tasks {}

    #[async_trait]
    impl TaskRepository for Tasks {
        async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn list_visible(
            &self,
            actor: UserId,
            filter: TaskListFilter,
            page: Page,
        ) -> TaskRepositoryResult<Vec<Task>>;
        async fn count_label_usage(
            &self,
        ) -> TaskRepositoryResult<Vec<(crate::label::domain::LabelId, u64)>>;
        async fn purge_label(
            &self,
            label: crate::label::domain::LabelId,
        ) -> TaskRepositoryResult<()>;
    }
}

/// A lost creation race surfaces as a duplicate-name rejection from the
/// store; the service must re-fetch the winning label and proceed.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lost_creation_race_reuses_the_winning_label() {
    let owner = UserId::new();
    let task = Task::new(
        NewTaskData {
            owner,
            title: "Race target".to_owned(),
            description: None,
            status: TaskStatus::default(),
            requested_progress: None,
            due_date: None,
        },
        &DefaultClock,
    )
    .expect("task construction should succeed");
    let task_id = task.id();

    let winner_name = LabelName::new("Urgent").expect("valid label name");
    let winner = Label::auto(winner_name.clone(), &DefaultClock);
    let winner_id = winner.id();

    let mut labels = MockLabels::new();
    let mut sequence = mockall::Sequence::new();
    labels
        .expect_find_by_name()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| Ok(None));
    labels
        .expect_store()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|label| {
            Err(LabelRepositoryError::DuplicateLabelName(
                label.name().clone(),
            ))
        });
    labels
        .expect_find_by_name()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(move |_| Ok(Some(winner.clone())));

    let mut tasks = MockTasks::new();
    let lookup_task = task.clone();
    tasks
        .expect_find_by_id()
        .times(1)
        .returning(move |_| Ok(Some(lookup_task.clone())));
    tasks.expect_update().times(1).returning(|_| Ok(()));

    let service =
        LabelAttachmentService::new(Arc::new(tasks), Arc::new(labels), Arc::new(DefaultClock));

    let task = service
        .add_label(task_id, owner, "Urgent")
        .await
        .expect("race loser should adopt the winning label");

    assert!(task.labels().contains(&winner_id));
}
