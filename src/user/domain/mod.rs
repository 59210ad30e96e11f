//! Domain model for user accounts.

mod credentials;
mod email;
mod error;
mod ids;
mod user;

pub use credentials::PasswordHash;
pub use email::EmailAddress;
pub use error::UserDomainError;
pub use ids::UserId;
pub use user::{PersistedUserData, User};
