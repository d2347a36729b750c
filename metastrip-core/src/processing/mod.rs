//! Core metadata removal logic and orchestration.
//!
//! `strip` holds the single-file strip-and-replace sequence, `batch` drives it
//! over a directory tree, and `outcome` describes what happened.

/// Directory-level orchestration
pub mod batch;

/// Per-file and per-run results
pub mod outcome;

/// Single-file strip-and-replace
pub mod strip;

pub use batch::{process_videos, strip_directory};
pub use outcome::{FileOutcome, FileStatus, OrphanedTempFile, RunSummary, Verification};
pub use strip::strip_metadata;
