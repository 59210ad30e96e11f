//! Repository port for label persistence and name lookup.

use crate::label::domain::{Label, LabelId, LabelName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for label repository operations.
pub type LabelRepositoryResult<T> = Result<T, LabelRepositoryError>;

/// Label persistence contract.
///
/// Name uniqueness is enforced by the store; callers racing on
/// resolve-or-create receive [`LabelRepositoryError::DuplicateLabelName`]
/// and are expected to re-fetch the winner.
#[async_trait]
pub trait LabelRepository: Send + Sync {
    /// Stores a new label.
    ///
    /// # Errors
    ///
    /// Returns [`LabelRepositoryError::DuplicateLabelName`] when the name is
    /// already taken, or [`LabelRepositoryError::DuplicateLabel`] when the
    /// label ID already exists.
    async fn store(&self, label: &Label) -> LabelRepositoryResult<()>;

    /// Persists changes to an existing label (name, colour, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`LabelRepositoryError::NotFound`] when the label does not
    /// exist, or [`LabelRepositoryError::DuplicateLabelName`] when a rename
    /// collides with another label.
    async fn update(&self, label: &Label) -> LabelRepositoryResult<()>;

    /// Deletes a label.
    ///
    /// # Errors
    ///
    /// Returns [`LabelRepositoryError::NotFound`] when the label does not
    /// exist.
    async fn delete(&self, id: LabelId) -> LabelRepositoryResult<()>;

    /// Finds a label by internal identifier.
    ///
    /// Returns `None` when the label does not exist.
    async fn find_by_id(&self, id: LabelId) -> LabelRepositoryResult<Option<Label>>;

    /// Finds a label by unique name (case-sensitive exact match).
    ///
    /// Returns `None` when no label has the given name.
    async fn find_by_name(&self, name: &LabelName) -> LabelRepositoryResult<Option<Label>>;

    /// Returns a page of labels ordered by creation time.
    async fn list(&self, skip: u32, limit: u32) -> LabelRepositoryResult<Vec<Label>>;

    /// Returns every label ordered by creation time.
    async fn list_all(&self) -> LabelRepositoryResult<Vec<Label>>;
}

/// Errors returned by label repository implementations.
#[derive(Debug, Clone, Error)]
pub enum LabelRepositoryError {
    /// A label with the same identifier already exists.
    #[error("duplicate label identifier: {0}")]
    DuplicateLabel(LabelId),

    /// A label with the same name already exists.
    #[error("duplicate label name: {0}")]
    DuplicateLabelName(LabelName),

    /// The label was not found.
    #[error("label not found: {0}")]
    NotFound(LabelId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl LabelRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
