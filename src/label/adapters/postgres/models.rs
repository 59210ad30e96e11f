//! Diesel row models for label persistence.

use super::schema::labels;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for label records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = labels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LabelRow {
    /// Internal label identifier.
    pub id: uuid::Uuid,
    /// Globally unique label name.
    pub name: String,
    /// Display colour hex triplet.
    pub color: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for label records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = labels)]
pub struct NewLabelRow {
    /// Internal label identifier.
    pub id: uuid::Uuid,
    /// Globally unique label name.
    pub name: String,
    /// Display colour hex triplet.
    pub color: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
