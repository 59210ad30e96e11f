//! `PostgreSQL` adapters for label catalog persistence.

mod models;
mod repository;
mod schema;

pub use repository::{LabelPgPool, PostgresLabelRepository};
