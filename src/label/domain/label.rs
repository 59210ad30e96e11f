//! Label aggregate root.

use super::{LabelColor, LabelId, LabelName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Label aggregate root.
///
/// Labels have no single owner; they are shared across tasks through the
/// task-label association owned by the task aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    id: LabelId,
    name: LabelName,
    color: LabelColor,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted label aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedLabelData {
    /// Persisted label identifier.
    pub id: LabelId,
    /// Persisted unique name.
    pub name: LabelName,
    /// Persisted display colour.
    pub color: LabelColor,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Label {
    /// Creates a new label with the given name and colour.
    #[must_use]
    pub fn new(name: LabelName, color: LabelColor, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: LabelId::new(),
            name,
            color,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Creates a label with a colour drawn from the fixed light palette.
    ///
    /// Used by the resolve-or-create path when a label name is attached to a
    /// task before the label exists.
    #[must_use]
    pub fn auto(name: LabelName, clock: &impl Clock) -> Self {
        Self::new(name, LabelColor::pick_light(), clock)
    }

    /// Reconstructs a label from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedLabelData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            color: data.color,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the label identifier.
    #[must_use]
    pub const fn id(&self) -> LabelId {
        self.id
    }

    /// Returns the label name.
    #[must_use]
    pub const fn name(&self) -> &LabelName {
        &self.name
    }

    /// Returns the display colour.
    #[must_use]
    pub const fn color(&self) -> &LabelColor {
        &self.color
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Renames the label.
    pub fn rename(&mut self, name: LabelName, clock: &impl Clock) {
        self.name = name;
        self.touch(clock);
    }

    /// Replaces the display colour.
    pub fn recolor(&mut self, color: LabelColor, clock: &impl Clock) {
        self.color = color;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
