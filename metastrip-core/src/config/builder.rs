// ============================================================================
// metastrip-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for StripConfig
//
// Fluent construction of StripConfig. Unset fields keep the defaults from
// config/mod.rs; extensions are normalised to lowercase with a leading dot.

// ---- Standard library imports ----
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

// ---- Internal crate imports ----
use super::{ExternalTools, PackageManager, StripConfig};

/// Builder for creating StripConfig instances.
///
/// # Examples
///
/// ```rust
/// use metastrip_core::config::StripConfigBuilder;
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// let config = StripConfigBuilder::new()
///     .root_dir(PathBuf::from("/srv/media"))
///     .extensions(["MP4", ".mkv"])
///     .run_timeout(Duration::from_secs(600))
///     .build();
///
/// assert!(config.extensions.contains(".mp4"));
/// assert!(config.extensions.contains(".mkv"));
/// assert_eq!(config.extensions.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StripConfigBuilder {
    config: StripConfig,
}

impl StripConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory to scan.
    pub fn root_dir(mut self, root_dir: PathBuf) -> Self {
        self.config.root_dir = root_dir;
        self
    }

    /// Replaces the extension allow-list. Accepts `mp4`, `.mp4` or `.MP4`.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect::<BTreeSet<_>>();
        self
    }

    /// Enables or disables pre-strip inspection and post-strip verification.
    pub fn verify(mut self, verify: bool) -> Self {
        self.config.verify = verify;
        self
    }

    pub fn temp_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.temp_marker = marker.into();
        self
    }

    pub fn remove_orphaned_temp_files(mut self, remove: bool) -> Self {
        self.config.remove_orphaned_temp_files = remove;
        self
    }

    pub fn run_timeout(mut self, timeout: Duration) -> Self {
        self.config.run_timeout = timeout;
        self
    }

    pub fn install_timeout(mut self, timeout: Duration) -> Self {
        self.config.install_timeout = timeout;
        self
    }

    pub fn ffmpeg(mut self, program: PathBuf) -> Self {
        self.config.tools.ffmpeg = program;
        self
    }

    pub fn ffprobe(mut self, program: PathBuf) -> Self {
        self.config.tools.ffprobe = program;
        self
    }

    pub fn package_manager(mut self, manager: PackageManager) -> Self {
        self.config.tools.package_manager = manager;
        self
    }

    pub fn tools(mut self, tools: ExternalTools) -> Self {
        self.config.tools = tools;
        self
    }

    /// Builds the StripConfig. Call [`StripConfig::validate`] before use.
    pub fn build(self) -> StripConfig {
        self.config
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}
