//! User-visible failure taxonomy shared by all service layers.
//!
//! Every business-rule failure surfaces as a typed service error; the
//! boundary layer translates each error's [`ErrorKind`] into a user-visible
//! response with a 1:1 kind-to-code mapping. Infrastructure failures carry
//! the [`ErrorKind::Internal`] kind, which sits outside the business
//! taxonomy and maps to a generic fault at the boundary.

/// Classification of a service-layer failure for boundary translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The entity is absent, or exists but is not visible to the actor.
    NotFound,
    /// The entity is visible but the actor lacks authority for the action.
    Forbidden,
    /// A uniqueness or membership rule was violated.
    Conflict,
    /// The request payload failed domain validation.
    Invalid,
    /// An infrastructure failure unrelated to the business taxonomy.
    Internal,
}
