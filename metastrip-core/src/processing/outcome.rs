//! Per-file and per-run results returned by the batch driver.

use crate::metadata::Finding;

use std::path::PathBuf;
use std::time::Duration;

/// Result of the post-strip metadata check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Verification is disabled in the configuration.
    Skipped,
    /// Only technical or ffmpeg-generated tags remain.
    Clean,
    /// Tags that should have been removed are still present.
    TagsRemaining(Vec<Finding>),
    /// The stripped file could not be probed.
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Stripped(Verification),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Findings before stripping; `None` when verification is off or the probe failed.
    pub findings_before: Option<Vec<Finding>>,
    pub status: FileStatus,
    pub duration: Duration,
}

impl FileOutcome {
    pub fn is_stripped(&self) -> bool {
        matches!(self.status, FileStatus::Stripped(_))
    }
}

/// A temp file from an interrupted run, found next to its original at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanedTempFile {
    pub path: PathBuf,
    pub removed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
    pub orphans: Vec<OrphanedTempFile>,
    /// Files never started because the run deadline expired.
    pub not_started: Vec<PathBuf>,
    pub timed_out: bool,
}

impl RunSummary {
    pub fn stripped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_stripped()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.stripped_count()
    }

    /// Stripped files whose verification found leftover tags.
    pub fn unverified_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(
                    o.status,
                    FileStatus::Stripped(Verification::TagsRemaining(_) | Verification::Unavailable(_))
                )
            })
            .count()
    }
}
