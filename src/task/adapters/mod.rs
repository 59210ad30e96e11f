//! Adapter implementations of task management ports.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryTaskRepository;
pub use postgres::PostgresTaskRepository;
