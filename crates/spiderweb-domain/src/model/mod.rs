//! Domain Models - The vocabulary of the Spider Web
//!
//! These types represent the "Ubiquitous Language" of the dashboard.
//! Every name here should match how the sales floor talks about the system.

pub mod interaction;
pub mod lead;
pub mod module;
pub mod state;
pub mod system_log;
pub mod time;
pub mod user;
