//! Port contracts for the label catalog.
//!
//! Ports define infrastructure-agnostic interfaces used by label services.

pub mod repository;

pub use repository::{LabelRepository, LabelRepositoryError, LabelRepositoryResult};
