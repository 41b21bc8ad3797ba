//! Domain Services - Business logic that doesn't belong to a single entity
//!
//! Services operate on the whole snapshot and contain the "verbs" of the domain.

pub mod reaction_engine;
pub mod scoring;
