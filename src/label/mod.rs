//! Label catalog for Taskdeck.
//!
//! Labels are shared, globally unique tags with a display colour. They are
//! created either directly through the catalog service or implicitly when a
//! label name is attached to a task (resolve-or-create with an
//! auto-assigned palette colour). The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
