//! Outbound Adapters - Collaborators and system services
//!
//! - `places` decodes Places text-search responses into leads
//! - `offline` serves discovery and generation without a network
//! - `system` provides the wall clock and random ids

pub mod offline;
pub mod places;
pub mod system;

pub use offline::{FixtureLeadDiscovery, OfflineTextGenerator};
pub use places::{decode_places, PlacesResponse};
pub use system::{SystemClock, UuidIds};
