//! Core library for removing embedded metadata from video files using ffmpeg and ffprobe.
//!
//! This crate provides recursive video discovery, metadata inspection and
//! classification, lossless in-place stripping through a sibling temp file, and
//! bootstrap of the ffmpeg dependency.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use metastrip_core::external::{FfprobeExecutor, SidecarTranscoder};
//! use metastrip_core::util::Deadline;
//! use metastrip_core::{StripConfigBuilder, ensure_available, strip_directory};
//! use std::path::PathBuf;
//!
//! let config = StripConfigBuilder::new()
//!     .root_dir(PathBuf::from("/path/to/videos"))
//!     .verify(true)
//!     .build();
//! config.validate().unwrap();
//!
//! let deadline = Deadline::after(config.run_timeout);
//! ensure_available(&config.tools, config.install_timeout, &deadline).unwrap();
//!
//! let summary = strip_directory(
//!     &FfprobeExecutor::new(&config.tools.ffprobe),
//!     &SidecarTranscoder::new(&config.tools.ffmpeg),
//!     &config,
//!     &deadline,
//! )
//! .unwrap();
//! println!("{} file(s) stripped", summary.stripped_count());
//! ```

pub mod config;
pub mod dependencies;
pub mod discovery;
pub mod error;
pub mod external;
pub mod metadata;
pub mod processing;
pub mod temp_files;
pub mod util;

// Re-exports for public API
pub use config::{StripConfig, StripConfigBuilder};
pub use dependencies::ensure_available;
pub use discovery::find_video_files;
pub use error::{CoreError, CoreResult};
pub use metadata::{Finding, IgnorePolicy, MetadataSnapshot, classify};
pub use processing::{
    FileOutcome, FileStatus, OrphanedTempFile, RunSummary, Verification, process_videos,
    strip_directory, strip_metadata,
};
