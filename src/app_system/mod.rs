//! System orchestration, startup, and shutdown logic.

pub mod calculator_system;
pub mod tracing;

pub use calculator_system::*;
pub use tracing::*;
