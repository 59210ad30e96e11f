//! Adapter implementations of user account ports.

pub mod hasher;
pub mod memory;
pub mod postgres;

pub use hasher::SaltedSha256Hasher;
pub use memory::InMemoryUserRepository;
pub use postgres::PostgresUserRepository;
