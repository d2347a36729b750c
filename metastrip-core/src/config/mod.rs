//! Configuration structures and constants for the metastrip-core library.
//!
//! This module describes what a run touches (root directory, extension
//! allow-list), how it behaves (verification, orphan cleanup, timeouts) and
//! which external programs it drives.

mod builder;

use crate::error::{CoreError, CoreResult};

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

pub use builder::StripConfigBuilder;

// Default constants

/// Extensions (lowercase, with leading dot) treated as video files.
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &[
    ".mp4", ".mkv", ".avi", ".mov", ".wmv", ".flv", ".webm", ".m4v",
];

/// Infix added to the base name of the sibling output file: `clip.mp4` -> `clip.tmp.mp4`.
pub const DEFAULT_TEMP_MARKER: &str = ".tmp";

/// Wall-clock bound for an entire run.
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Bound for the package-manager install step, nested inside the run bound.
pub const DEFAULT_INSTALL_TIMEOUT: Duration = Duration::from_secs(20 * 60);

pub const DEFAULT_FFMPEG_BIN: &str = "ffmpeg";
pub const DEFAULT_FFPROBE_BIN: &str = "ffprobe";

/// Package manager used to bootstrap ffmpeg when it is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    /// Program name or path (e.g. `brew`)
    pub program: PathBuf,
    /// Argument whose zero exit status proves the manager is installed
    pub version_arg: String,
    /// Arguments preceding the package name in the install invocation
    pub install_args: Vec<String>,
    /// Package that provides both ffmpeg and ffprobe
    pub package: String,
    /// Shell command that installs the package manager itself
    pub setup_command: String,
    /// Hint printed when the package installed but the binary is still not on PATH
    pub path_hint: String,
}

impl PackageManager {
    pub fn homebrew() -> Self {
        Self {
            program: PathBuf::from("brew"),
            version_arg: "--version".to_string(),
            install_args: vec!["install".to_string()],
            package: "ffmpeg".to_string(),
            setup_command: "/bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"".to_string(),
            path_hint: "export PATH=\"/opt/homebrew/bin:$PATH\"".to_string(),
        }
    }

    /// The install command as a user would type it, e.g. `brew install ffmpeg`.
    pub fn install_command_line(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.install_args.iter().cloned());
        parts.push(self.package.clone());
        parts.join(" ")
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::homebrew()
    }
}

/// External programs driven by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTools {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
    pub package_manager: PackageManager,
}

impl Default for ExternalTools {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from(DEFAULT_FFMPEG_BIN),
            ffprobe: PathBuf::from(DEFAULT_FFPROBE_BIN),
            package_manager: PackageManager::default(),
        }
    }
}

/// Main configuration structure for the metastrip-core library.
///
/// Created by the consumer (e.g. metastrip-cli), usually through
/// [`StripConfigBuilder`], and passed to [`crate::strip_directory`].
///
/// # Examples
///
/// ```rust
/// use metastrip_core::config::StripConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = StripConfigBuilder::new()
///     .root_dir(PathBuf::from("/path/to/videos"))
///     .verify(false)
///     .build();
/// assert!(config.validate().is_ok());
/// assert!(config.extensions.contains(".mkv"));
/// ```
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Directory scanned recursively for video files
    pub root_dir: PathBuf,

    /// Lowercase extensions, including the leading dot
    pub extensions: BTreeSet<String>,

    /// Inspect metadata before stripping and verify removal afterwards
    pub verify: bool,

    /// Infix marking the sibling temp file written by ffmpeg
    pub temp_marker: String,

    /// Delete temp files left behind by an interrupted run instead of only reporting them
    pub remove_orphaned_temp_files: bool,

    /// Wall-clock bound for the whole run
    pub run_timeout: Duration,

    /// Bound for the dependency install step
    pub install_timeout: Duration,

    pub tools: ExternalTools,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            extensions: default_extensions(),
            verify: true,
            temp_marker: DEFAULT_TEMP_MARKER.to_string(),
            remove_orphaned_temp_files: false,
            run_timeout: DEFAULT_RUN_TIMEOUT,
            install_timeout: DEFAULT_INSTALL_TIMEOUT,
            tools: ExternalTools::default(),
        }
    }
}

impl StripConfig {
    pub fn new(root_dir: PathBuf) -> Self {
        Self {
            root_dir,
            ..Self::default()
        }
    }

    /// Checks the configuration for values that would make a run meaningless or unsafe.
    pub fn validate(&self) -> CoreResult<()> {
        if self.extensions.is_empty() {
            return Err(CoreError::Config(
                "at least one video extension is required".to_string(),
            ));
        }
        if let Some(bad) = self.extensions.iter().find(|ext| !ext.starts_with('.') || ext.len() < 2) {
            return Err(CoreError::Config(format!(
                "extension '{bad}' must start with a dot, e.g. '.mp4'"
            )));
        }
        if self.temp_marker.is_empty() {
            return Err(CoreError::Config("temp marker must not be empty".to_string()));
        }
        if self.run_timeout.is_zero() || self.install_timeout.is_zero() {
            return Err(CoreError::Config("timeouts must be greater than zero".to_string()));
        }
        Ok(())
    }
}

pub fn default_extensions() -> BTreeSet<String> {
    DEFAULT_VIDEO_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}
