//! User accounts for Taskdeck.
//!
//! Users register with a unique email and a credential that is digested
//! behind the [`ports::PasswordHasher`] port; identity resolution for
//! inbound requests is a surrounding collaborator's concern. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
