//! Domain model for task management.
//!
//! The task domain models ownership, participant membership, label
//! association, and the reconciliation rule that keeps `status` and
//! `progress` mutually consistent, while keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod patch;
mod progress;
pub mod reconcile;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use patch::TaskPatch;
pub use progress::Progress;
pub use status::TaskStatus;
pub use task::{NewTaskData, PersistedTaskData, Task, TaskTitle};
