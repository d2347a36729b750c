// metastrip-cli/src/lib.rs
//
// Library portion of the metastrip CLI application.
// Contains argument definitions, logging setup and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::run_strip;
pub use error::{CliErrorContext, CliResult};
