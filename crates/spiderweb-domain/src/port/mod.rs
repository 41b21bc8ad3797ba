//! Ports - What the domain needs from the outside world
//!
//! Time, identities and the two external collaborators. Adapters
//! provide the real implementations.

pub mod clock;
pub mod collaborator;
