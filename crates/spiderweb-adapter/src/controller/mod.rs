//! Inbound Adapters - What drives the workspace besides the operator
//!
//! - `autopilot` runs catalog actions on a timer
//! - `export` renders snapshots for display and for the ecosystem prompt

pub mod autopilot;
pub mod export;

pub use autopilot::{spawn_autopilot, AutopilotHandle, AutopilotOptions};
pub use export::{
    analyze_ecosystem, catalog_to_json, ecosystem_prompt, to_json, LogStatsView, SnapshotView,
};
