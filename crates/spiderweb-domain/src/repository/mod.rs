//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait StateStore      │  InMemoryStateStore
//!   fn snapshot()       │
//!   fn apply()          │
//! ```

pub mod state_store;
