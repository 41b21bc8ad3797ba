//! Persistence Adapters - State store implementations
//!
//! These implement the `StateStore` trait from spiderweb-domain.

pub mod in_memory;

pub use in_memory::InMemoryStateStore;
