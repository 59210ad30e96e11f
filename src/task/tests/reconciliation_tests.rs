//! Unit tests for status/progress reconciliation.
//!
//! The reconciliation rule is the only cross-field coupling in the system;
//! every branch of the create and update contracts is pinned here.

use crate::task::domain::{Progress, TaskStatus, reconcile};
use rstest::rstest;

#[rstest]
#[case(TaskStatus::Todo, None, 0)]
#[case(TaskStatus::Todo, Some(55), 0)]
#[case(TaskStatus::Todo, Some(150), 0)]
#[case(TaskStatus::Done, None, 100)]
#[case(TaskStatus::Done, Some(10), 100)]
#[case(TaskStatus::Doing, None, 0)]
#[case(TaskStatus::Doing, Some(50), 50)]
#[case(TaskStatus::Doing, Some(150), 100)]
#[case(TaskStatus::Doing, Some(-10), 0)]
fn on_create_pairs_status_with_consistent_progress(
    #[case] status: TaskStatus,
    #[case] requested: Option<i32>,
    #[case] expected_progress: u8,
) {
    let (next_status, next_progress) = reconcile::on_create(status, requested);

    assert_eq!(next_status, status);
    assert_eq!(next_progress.value(), expected_progress);
}

#[rstest]
#[case(TaskStatus::Doing, 60, TaskStatus::Todo, None, TaskStatus::Todo, 0)]
#[case(TaskStatus::Doing, 60, TaskStatus::Done, None, TaskStatus::Done, 100)]
#[case(TaskStatus::Todo, 0, TaskStatus::Done, Some(10), TaskStatus::Done, 100)]
#[case(TaskStatus::Done, 100, TaskStatus::Todo, Some(40), TaskStatus::Todo, 0)]
#[case(TaskStatus::Doing, 60, TaskStatus::Doing, None, TaskStatus::Doing, 60)]
#[case(TaskStatus::Todo, 0, TaskStatus::Doing, None, TaskStatus::Doing, 0)]
#[case(TaskStatus::Todo, 0, TaskStatus::Doing, Some(75), TaskStatus::Doing, 75)]
#[case(TaskStatus::Doing, 20, TaskStatus::Doing, Some(150), TaskStatus::Doing, 100)]
#[case(TaskStatus::Doing, 20, TaskStatus::Doing, Some(-5), TaskStatus::Doing, 0)]
fn on_update_with_status_applies_creation_rules(
    #[case] current_status: TaskStatus,
    #[case] current_progress: u8,
    #[case] requested_status: TaskStatus,
    #[case] requested_progress: Option<i32>,
    #[case] expected_status: TaskStatus,
    #[case] expected_progress: u8,
) {
    let current = Progress::clamped(i32::from(current_progress));

    let (next_status, next_progress) = reconcile::on_update(
        current_status,
        current,
        Some(requested_status),
        requested_progress,
    );

    assert_eq!(next_status, expected_status);
    assert_eq!(next_progress.value(), expected_progress);
}

#[rstest]
#[case(0, TaskStatus::Todo, 0)]
#[case(100, TaskStatus::Done, 100)]
#[case(37, TaskStatus::Doing, 37)]
#[case(1, TaskStatus::Doing, 1)]
#[case(99, TaskStatus::Doing, 99)]
#[case(150, TaskStatus::Done, 100)]
#[case(-5, TaskStatus::Todo, 0)]
fn on_update_with_progress_only_infers_status(
    #[case] requested: i32,
    #[case] expected_status: TaskStatus,
    #[case] expected_progress: u8,
) {
    let (next_status, next_progress) = reconcile::on_update(
        TaskStatus::Doing,
        Progress::clamped(60),
        None,
        Some(requested),
    );

    assert_eq!(next_status, expected_status);
    assert_eq!(next_progress.value(), expected_progress);
}

#[rstest]
#[case(TaskStatus::Todo, 0)]
#[case(TaskStatus::Doing, 42)]
#[case(TaskStatus::Done, 100)]
fn on_update_with_neither_field_changes_nothing(
    #[case] current_status: TaskStatus,
    #[case] current_progress: u8,
) {
    let current = Progress::clamped(i32::from(current_progress));

    let (next_status, next_progress) =
        reconcile::on_update(current_status, current, None, None);

    assert_eq!(next_status, current_status);
    assert_eq!(next_progress, current);
}
