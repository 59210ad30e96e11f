//! Diesel row models for task persistence.

use super::schema::{task_labels, task_participants, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Workflow status.
    pub status: String,
    /// Progress percentage.
    pub progress: i32,
    /// Visibility flag.
    pub is_active: bool,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Owner's user identifier.
    pub owner_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Workflow status.
    pub status: String,
    /// Progress percentage.
    pub progress: i32,
    /// Visibility flag.
    pub is_active: bool,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Owner's user identifier.
    pub owner_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for participant membership edges.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = task_participants)]
pub struct NewTaskParticipantRow {
    /// Task side of the edge.
    pub task_id: uuid::Uuid,
    /// User side of the edge.
    pub user_id: uuid::Uuid,
}

/// Insert model for label attachment edges.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = task_labels)]
pub struct NewTaskLabelRow {
    /// Task side of the edge.
    pub task_id: uuid::Uuid,
    /// Label side of the edge.
    pub label_id: uuid::Uuid,
}
