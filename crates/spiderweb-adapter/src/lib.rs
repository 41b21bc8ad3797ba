//! # Spider Web Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapters (autopilot timer, snapshot export)
//! - `gateway/` - Outbound adapters (places search, text generation, clock)
//! - `repository/` - State store implementations

pub mod controller;
pub mod gateway;
pub mod repository;
