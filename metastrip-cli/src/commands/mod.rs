//! Command implementations for the CLI.

/// The strip command: metadata removal for every video below a directory.
pub mod strip;

pub use strip::run_strip;
