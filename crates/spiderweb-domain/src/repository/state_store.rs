//! State Store - The single write target of the reaction engine
//!
//! A store holds exactly one [`AppState`] snapshot. Readers get a shared
//! pointer to it; writers hand the store a closure and the store swaps in
//! the closure's result as one replacement.

use std::sync::Arc;

use crate::model::state::AppState;

/// Errors that can occur during store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A writer panicked while holding the snapshot
    Poisoned { operation: &'static str },
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::Poisoned { operation } => {
                write!(f, "State store poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// State Store Trait
///
/// This is a PORT in hexagonal architecture.
///
/// Replacements apply in call order. There is no isolation between two
/// `apply` calls beyond that ordering.
pub trait StateStore: Send + Sync {
    /// Current snapshot. It never changes after it is handed out.
    fn snapshot(&self) -> Result<Arc<AppState>, StoreError>;

    /// Apply `f` to the next revision and commit it
    fn apply<R, F>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut AppState) -> R;

    /// Revision of the current snapshot
    fn revision(&self) -> Result<u64, StoreError> {
        Ok(self.snapshot()?.revision())
    }
}
