//! Utility functions and helpers module
//!
//! Command execution with deadline-based cancellation, shared by the
//! dependency checker and the external tool adapters.

pub mod command;
pub mod deadline;

// Re-export commonly used types and functions
pub use command::{describe, is_command_available, log_command, run_captured, run_with_deadline};
pub use deadline::Deadline;
