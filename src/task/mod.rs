//! Task management for Taskdeck.
//!
//! Tasks are owned by the user who created them and shared with invited
//! participants. The module implements the status/progress reconciliation
//! rule, the membership and authorization guard, participant management,
//! and label attachment. It follows hexagonal architecture:
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
