//! In-memory repository for label catalog tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::label::{
    domain::{Label, LabelId, LabelName},
    ports::{LabelRepository, LabelRepositoryError, LabelRepositoryResult},
};

/// Thread-safe in-memory label repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLabelRepository {
    state: Arc<RwLock<InMemoryLabelState>>,
}

#[derive(Debug, Default)]
struct InMemoryLabelState {
    labels: HashMap<LabelId, Label>,
    name_index: HashMap<LabelName, LabelId>,
}

impl InMemoryLabelRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sorts labels by creation time for stable listing.
fn sorted_by_creation(state: &InMemoryLabelState) -> Vec<Label> {
    let mut labels: Vec<Label> = state.labels.values().cloned().collect();
    labels.sort_by_key(Label::created_at);
    labels
}

#[async_trait]
impl LabelRepository for InMemoryLabelRepository {
    async fn store(&self, label: &Label) -> LabelRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            LabelRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.labels.contains_key(&label.id()) {
            return Err(LabelRepositoryError::DuplicateLabel(label.id()));
        }

        if state.name_index.contains_key(label.name()) {
            return Err(LabelRepositoryError::DuplicateLabelName(
                label.name().clone(),
            ));
        }

        state.name_index.insert(label.name().clone(), label.id());
        state.labels.insert(label.id(), label.clone());
        Ok(())
    }

    async fn update(&self, label: &Label) -> LabelRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            LabelRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_name = state
            .labels
            .get(&label.id())
            .ok_or(LabelRepositoryError::NotFound(label.id()))?
            .name()
            .clone();

        if *label.name() != old_name {
            if let Some(&indexed_id) = state.name_index.get(label.name())
                && indexed_id != label.id()
            {
                return Err(LabelRepositoryError::DuplicateLabelName(
                    label.name().clone(),
                ));
            }
            state.name_index.remove(&old_name);
            state.name_index.insert(label.name().clone(), label.id());
        }

        state.labels.insert(label.id(), label.clone());
        Ok(())
    }

    async fn delete(&self, id: LabelId) -> LabelRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            LabelRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let label = state
            .labels
            .remove(&id)
            .ok_or(LabelRepositoryError::NotFound(id))?;
        state.name_index.remove(label.name());
        Ok(())
    }

    async fn find_by_id(&self, id: LabelId) -> LabelRepositoryResult<Option<Label>> {
        let state = self.state.read().map_err(|err| {
            LabelRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.labels.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &LabelName) -> LabelRepositoryResult<Option<Label>> {
        let state = self.state.read().map_err(|err| {
            LabelRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let label = state
            .name_index
            .get(name)
            .and_then(|id| state.labels.get(id))
            .cloned();
        Ok(label)
    }

    async fn list(&self, skip: u32, limit: u32) -> LabelRepositoryResult<Vec<Label>> {
        let state = self.state.read().map_err(|err| {
            LabelRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(sorted_by_creation(&state)
            .into_iter()
            .skip(skip)
            .take(limit)
            .collect())
    }

    async fn list_all(&self) -> LabelRepositoryResult<Vec<Label>> {
        let state = self.state.read().map_err(|err| {
            LabelRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(sorted_by_creation(&state))
    }
}
