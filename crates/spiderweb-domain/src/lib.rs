//! # Spider Web Domain Layer
//!
//! The scoring and reaction core of the Spider Web dashboard.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities, value objects, the AppState snapshot││
//! │  │  port/      - Clock, ids, external collaborators            ││
//! │  │  repository/- StateStore trait (not implementations)        ││
//! │  │  service/   - ScoringMatrix + ReactionEngine                ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! If the places index or the text model changes, this crate doesn't change.
//! Every point awarded, every coin credited and every audit line written
//! goes through [`ReactionEngine`].

pub mod model;
pub mod port;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    interaction::{Interaction, InteractionId, InteractionType, Outcome},
    lead::{Lead, LeadId, LeadSource, LeadStatus},
    module::ModuleId,
    state::AppState,
    system_log::{Impact, LogId, LogRing, LogStats, SystemLog, DEFAULT_LOG_CAPACITY},
    time::Timestamp,
    user::{User, UserId, UserRole},
};

pub use port::{
    clock::{Clock, IdGenerator, ManualClock, SequentialIds},
    collaborator::{GenerationMode, LeadDiscovery, TextGenerator},
};

pub use repository::state_store::{StateStore, StoreError};

pub use service::{
    reaction_engine::{Reaction, ReactionEngine, Trigger},
    scoring::{ScoreEvent, ScoringMatrix},
};
