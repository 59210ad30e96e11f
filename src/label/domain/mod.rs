//! Domain model for the label catalog.
//!
//! Labels are identified by a globally unique name and carry a display
//! colour drawn from a fixed light palette when auto-created.

mod color;
mod error;
mod ids;
mod label;
mod name;

pub use color::{LIGHT_PALETTE, LabelColor};
pub use error::LabelDomainError;
pub use ids::LabelId;
pub use label::{Label, PersistedLabelData};
pub use name::LabelName;
