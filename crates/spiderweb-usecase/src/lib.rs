//! # Spider Web Use Case Layer
//!
//! Application-specific business rules.
//! This layer turns dashboard actions (buttons, the autopilot, discovery
//! results) into reactions on the domain.

pub mod autopilot;
pub mod catalog;
pub mod visibility;
pub mod workspace;

pub use spiderweb_domain;

pub use autopilot::{AutopilotPlanner, AUTOPILOT_PREFIX};
pub use catalog::{AiAction, AiCatalog, ResolvedAction, AUTO_FIX_GLOBAL};
pub use visibility::{MenuVisibility, LOCKED_MODULES};
pub use workspace::{ActionOrigin, AiActionRun, Workspace};
