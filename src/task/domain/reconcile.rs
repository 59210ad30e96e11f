//! Status/progress reconciliation.
//!
//! `status` and `progress` must always form a consistent pair:
//! `Todo` pairs with 0, `Done` pairs with 100, and `Doing` pairs with any
//! clamped value. When both fields arrive together the status wins and
//! progress is derived or clamped; when only progress arrives the status is
//! inferred from it. These rules run identically on creation and update and
//! are the only cross-field coupling in the system.

use super::{Progress, TaskStatus};

/// Reconciles the requested status and progress for a new task.
///
/// A missing progress request defaults to 0 before clamping. `Todo` and
/// `Done` override any requested progress with their fixed values.
#[must_use]
pub fn on_create(status: TaskStatus, requested_progress: Option<i32>) -> (TaskStatus, Progress) {
    match status {
        TaskStatus::Todo => (status, Progress::ZERO),
        TaskStatus::Done => (status, Progress::COMPLETE),
        TaskStatus::Doing => (status, Progress::clamped(requested_progress.unwrap_or(0))),
    }
}

/// Reconciles a partial update against the task's current pair.
///
/// - A supplied status applies the creation rules, except that `Doing`
///   without a progress value keeps the current progress.
/// - A supplied progress without a status infers the status from the
///   clamped value: 0 is `Todo`, 100 is `Done`, anything else `Doing`.
/// - Neither supplied leaves both fields untouched.
#[must_use]
pub fn on_update(
    current_status: TaskStatus,
    current_progress: Progress,
    status: Option<TaskStatus>,
    progress: Option<i32>,
) -> (TaskStatus, Progress) {
    match (status, progress) {
        (Some(next), requested) => match next {
            TaskStatus::Todo => (next, Progress::ZERO),
            TaskStatus::Done => (next, Progress::COMPLETE),
            TaskStatus::Doing => (
                next,
                requested.map_or(current_progress, Progress::clamped),
            ),
        },
        (None, Some(requested)) => {
            let clamped = Progress::clamped(requested);
            (TaskStatus::for_progress(clamped), clamped)
        }
        (None, None) => (current_status, current_progress),
    }
}
