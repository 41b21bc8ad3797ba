//! In-Memory State Store
//!
//! Holds the current snapshot behind an RwLock. Readers clone the `Arc`;
//! writers swap in the next snapshot while holding the write lock, so
//! concurrent callers apply in lock order and never see a half-applied
//! reaction.

use std::sync::{Arc, RwLock};

use spiderweb_domain::{AppState, StateStore, StoreError};

/// In-memory state store
///
/// Cheap to clone; clones share the same state.
#[derive(Debug, Clone)]
pub struct InMemoryStateStore {
    state: Arc<RwLock<Arc<AppState>>>,
}

impl InMemoryStateStore {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }
}

impl StateStore for InMemoryStateStore {
    fn snapshot(&self) -> Result<Arc<AppState>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned {
            operation: "snapshot",
        })?;
        Ok(Arc::clone(&state))
    }

    fn apply<R, F>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut AppState) -> R,
    {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned {
            operation: "apply",
        })?;
        let (next, out) = state.transition(f);
        *state = Arc::new(next);
        Ok(out)
    }
}
