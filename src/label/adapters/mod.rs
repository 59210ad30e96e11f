//! Adapter implementations of label catalog ports.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryLabelRepository;
pub use postgres::PostgresLabelRepository;
