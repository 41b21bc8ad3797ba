//! CLI Commands

pub mod autopilot;
pub mod catalog;
pub mod demo;
pub mod discover;

pub use autopilot::AutopilotCommand;
pub use catalog::CatalogCommand;
pub use demo::DemoCommand;
pub use discover::DiscoverCommand;
