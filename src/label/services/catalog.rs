//! Service layer for direct label catalog management.
//!
//! Resolve-or-create during task attachment lives in the task context; this
//! service covers the catalog surface: explicit creation, listing, renames,
//! deletion, and usage statistics.

use crate::errors::ErrorKind;
use crate::label::{
    domain::{Label, LabelColor, LabelDomainError, LabelId, LabelName},
    ports::{LabelRepository, LabelRepositoryError},
};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a label directly through the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLabelRequest {
    name: String,
    color: Option<String>,
}

impl CreateLabelRequest {
    /// Creates a request with the required label name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    /// Sets an explicit display colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Partial update for a label; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelPatch {
    name: Option<String>,
    color: Option<String>,
}

impl LabelPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new label name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new display colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A label paired with the number of tasks currently referencing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelUsage {
    /// The label.
    pub label: Label,
    /// Number of task-label edges pointing at the label; zero when unused.
    pub count: u64,
}

/// Service-level errors for label catalog operations.
#[derive(Debug, Error)]
pub enum LabelCatalogError {
    /// The label was not found.
    #[error("label not found: {0}")]
    NotFound(LabelId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LabelDomainError),

    /// Label repository operation failed.
    #[error(transparent)]
    Repository(#[from] LabelRepositoryError),

    /// Task repository operation failed while resolving usage or purging
    /// edges.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
}

impl LabelCatalogError {
    /// Returns the boundary-facing failure kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::Repository(LabelRepositoryError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::Domain(_) => ErrorKind::Invalid,
            Self::Repository(
                LabelRepositoryError::DuplicateLabelName(_)
                | LabelRepositoryError::DuplicateLabel(_),
            ) => ErrorKind::Conflict,
            Self::Repository(LabelRepositoryError::Persistence(_)) | Self::Tasks(_) => {
                ErrorKind::Internal
            }
        }
    }
}

/// Result type for label catalog service operations.
pub type LabelCatalogResult<T> = Result<T, LabelCatalogError>;

/// Label catalog orchestration service.
#[derive(Clone)]
pub struct LabelCatalogService<L, T, C>
where
    L: LabelRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    labels: Arc<L>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<L, T, C> LabelCatalogService<L, T, C>
where
    L: LabelRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new label catalog service.
    #[must_use]
    pub const fn new(labels: Arc<L>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            labels,
            tasks,
            clock,
        }
    }

    /// Creates a label with an explicit or default colour.
    ///
    /// # Errors
    ///
    /// Returns [`LabelCatalogError`] when validation fails or the name is
    /// already taken.
    pub async fn create(&self, request: CreateLabelRequest) -> LabelCatalogResult<Label> {
        let name = LabelName::new(request.name)?;
        let color = match request.color {
            Some(value) => LabelColor::new(value)?,
            None => LabelColor::catalog_default(),
        };

        let label = Label::new(name, color, &*self.clock);
        self.labels.store(&label).await?;
        Ok(label)
    }

    /// Finds a label by identifier.
    ///
    /// Returns `Ok(None)` when the label does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`LabelCatalogError::Repository`] when persistence lookup
    /// fails.
    pub async fn find(&self, id: LabelId) -> LabelCatalogResult<Option<Label>> {
        Ok(self.labels.find_by_id(id).await?)
    }

    /// Returns a page of labels ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`LabelCatalogError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self, skip: u32, limit: u32) -> LabelCatalogResult<Vec<Label>> {
        Ok(self.labels.list(skip, limit).await?)
    }

    /// Applies a partial update to a label.
    ///
    /// # Errors
    ///
    /// Returns [`LabelCatalogError::NotFound`] when the label does not
    /// exist, or a validation/conflict error when the patch is rejected.
    pub async fn update(&self, id: LabelId, patch: LabelPatch) -> LabelCatalogResult<Label> {
        let mut label = self
            .labels
            .find_by_id(id)
            .await?
            .ok_or(LabelCatalogError::NotFound(id))?;

        if let Some(name) = patch.name {
            label.rename(LabelName::new(name)?, &*self.clock);
        }
        if let Some(color) = patch.color {
            label.recolor(LabelColor::new(color)?, &*self.clock);
        }

        self.labels.update(&label).await?;
        Ok(label)
    }

    /// Deletes a label, removing every task-label edge pointing at it.
    ///
    /// # Errors
    ///
    /// Returns [`LabelCatalogError::NotFound`] when the label does not
    /// exist.
    pub async fn delete(&self, id: LabelId) -> LabelCatalogResult<Label> {
        let label = self
            .labels
            .find_by_id(id)
            .await?
            .ok_or(LabelCatalogError::NotFound(id))?;

        self.tasks.purge_label(id).await?;
        self.labels.delete(id).await?;
        Ok(label)
    }

    /// Returns every label paired with its task usage count, zero included.
    ///
    /// # Errors
    ///
    /// Returns [`LabelCatalogError`] when either repository lookup fails.
    pub async fn list_with_usage(&self) -> LabelCatalogResult<Vec<LabelUsage>> {
        let labels = self.labels.list_all().await?;
        let counts: HashMap<LabelId, u64> =
            self.tasks.count_label_usage().await?.into_iter().collect();

        Ok(labels
            .into_iter()
            .map(|label| {
                let count = counts.get(&label.id()).copied().unwrap_or(0);
                LabelUsage { label, count }
            })
            .collect())
    }
}
