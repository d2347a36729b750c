//! Error types for the metastrip-core library.
//!
//! Errors fall into two groups. Run-terminating errors (dependency bootstrap,
//! working directory, traversal) abort before or during discovery. File-scoped
//! errors (probe, strip, replace) are logged by the batch driver, which then
//! moves on to the next file.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory traversal error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    // ---- Dependency bootstrap (fatal) ----
    #[error("{0}")]
    DependencyUnavailable(String),

    #[error(
        "Installing {package} exceeded the {} minute timeout. Try installing it manually: {manual_command}",
        .after.as_secs() / 60
    )]
    InstallTimedOut {
        package: String,
        after: Duration,
        manual_command: String,
    },

    #[error("Failed to install {package}: {source}\nTry installing it manually: {manual_command}")]
    InstallFailed {
        package: String,
        manual_command: String,
        #[source]
        source: Box<CoreError>,
    },

    #[error("{0}")]
    NotOnPath(String),

    // ---- External command execution ----
    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Command '{command}' failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed waiting for command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("Command '{command}' timed out after {}s", .after.as_secs())]
    CommandTimeout { command: String, after: Duration },

    #[error("Failed to parse JSON output: {0}")]
    JsonParse(String),

    // ---- Strip and replace (file-scoped) ----
    #[error("ffmpeg failed for {}: {source}", .path.display())]
    StripFailed {
        path: PathBuf,
        #[source]
        source: Box<CoreError>,
    },

    #[error("Temporary file was not created: {}", .0.display())]
    TempFileMissing(PathBuf),

    #[error(
        "Temporary path {} already exists (left by an interrupted run?); remove it or rerun with --remove-orphans",
        .0.display()
    )]
    TempPathOccupied(PathBuf),

    #[error("Failed to replace {} with {}: {source}", .original.display(), .temp.display())]
    ReplaceFailed {
        original: PathBuf,
        temp: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for metastrip-core operations
pub type CoreResult<T> = Result<T, CoreError>;

pub fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into(),
    }
}

pub fn command_wait_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(command.into(), err)
}
