// ============================================================================
// metastrip-core/src/processing/batch.rs
// ============================================================================
//
// BATCH DRIVER: Sequential Metadata Removal Over a Directory Tree
//
// WORKFLOW:
// 1. Discover video files below the root directory
// 2. Set aside temp files left by an interrupted run (report, optionally delete)
// 3. For each video file, in order:
//    a. Read and report metadata (verify mode only)
//    b. Strip metadata and replace the original
//    c. Re-read metadata and report leftovers (verify mode only)
//
// Metadata read failures are warnings. A strip failure skips step (c) for that
// file. Neither stops the run; only the run deadline does.

// ---- Internal crate imports ----
use crate::config::StripConfig;
use crate::discovery::{find_video_files, partition_orphaned_temp_files};
use crate::error::CoreResult;
use crate::external::{MetadataProbe, Transcoder};
use crate::metadata::{Finding, IgnorePolicy, classify};
use crate::processing::outcome::{FileOutcome, FileStatus, OrphanedTempFile, RunSummary, Verification};
use crate::processing::strip::strip_metadata;
use crate::util::Deadline;

// ---- External crate imports ----
use log::{error, info, warn};

// ---- Standard library imports ----
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Discovers and processes every video under `config.root_dir`.
///
/// # Errors
///
/// Only run-terminating conditions are returned: an invalid configuration or a
/// directory traversal failure. Per-file failures are recorded in the summary.
///
/// # Examples
///
/// ```rust,no_run
/// use metastrip_core::external::{FfprobeExecutor, SidecarTranscoder};
/// use metastrip_core::util::Deadline;
/// use metastrip_core::{StripConfig, strip_directory};
/// use std::path::PathBuf;
///
/// let config = StripConfig::new(PathBuf::from("/path/to/videos"));
/// let deadline = Deadline::after(config.run_timeout);
/// let summary = strip_directory(
///     &FfprobeExecutor::new(&config.tools.ffprobe),
///     &SidecarTranscoder::new(&config.tools.ffmpeg),
///     &config,
///     &deadline,
/// )
/// .unwrap();
/// println!("{} stripped, {} failed", summary.stripped_count(), summary.failed_count());
/// ```
pub fn strip_directory<P, T>(
    probe: &P,
    transcoder: &T,
    config: &StripConfig,
    deadline: &Deadline,
) -> CoreResult<RunSummary>
where
    P: MetadataProbe + ?Sized,
    T: Transcoder + ?Sized,
{
    config.validate()?;
    info!("Scanning directory: {}", config.root_dir.display());

    let discovered = find_video_files(&config.root_dir, &config.extensions)?;
    let (videos, orphan_paths) = partition_orphaned_temp_files(discovered, &config.temp_marker);
    let orphans = handle_orphans(orphan_paths, config.remove_orphaned_temp_files);

    if videos.is_empty() {
        info!("No video files found");
        return Ok(RunSummary {
            orphans,
            ..RunSummary::default()
        });
    }

    info!("Found {} video file(s)", videos.len());

    let mut summary = process_videos(probe, transcoder, config, &videos, deadline);
    summary.orphans = orphans;
    Ok(summary)
}

/// Processes `files` sequentially, stopping early only when `deadline` expires.
pub fn process_videos<P, T>(
    probe: &P,
    transcoder: &T,
    config: &StripConfig,
    files: &[PathBuf],
    deadline: &Deadline,
) -> RunSummary
where
    P: MetadataProbe + ?Sized,
    T: Transcoder + ?Sized,
{
    let total = files.len();
    let mut summary = RunSummary::default();

    for (index, path) in files.iter().enumerate() {
        if deadline.is_expired() {
            summary.timed_out = true;
            summary.not_started = files[index..].to_vec();
            warn!(
                "Run timed out after {}s; {} file(s) not processed",
                deadline.budget().as_secs(),
                summary.not_started.len()
            );
            break;
        }

        let name = display_name(path);
        info!("");
        info!("[{}/{}] Processing: {}", index + 1, total, name);

        let outcome = process_file(probe, transcoder, config, path, deadline);
        match &outcome.status {
            FileStatus::Stripped(_) => info!("[{}/{}] Done: {}", index + 1, total, name),
            FileStatus::Failed(reason) => error!("Failed to process {}: {}", path.display(), reason),
        }
        summary.outcomes.push(outcome);
    }

    summary
}

fn process_file<P, T>(
    probe: &P,
    transcoder: &T,
    config: &StripConfig,
    path: &Path,
    deadline: &Deadline,
) -> FileOutcome
where
    P: MetadataProbe + ?Sized,
    T: Transcoder + ?Sized,
{
    let started = Instant::now();

    // ========================================================================
    // STEP 1: INSPECT
    // ========================================================================
    let findings_before = if config.verify {
        match probe.read_metadata(path, deadline) {
            Ok(snapshot) => {
                let findings = classify(&snapshot, IgnorePolicy::PreStrip);
                report_findings(&findings);
                Some(findings)
            }
            Err(e) => {
                warn!("  Could not read metadata: {}", e);
                None
            }
        }
    } else {
        None
    };

    // ========================================================================
    // STEP 2: STRIP AND REPLACE
    // ========================================================================
    if let Err(e) = strip_metadata(transcoder, path, &config.temp_marker, deadline) {
        return FileOutcome {
            path: path.to_path_buf(),
            findings_before,
            status: FileStatus::Failed(e.to_string()),
            duration: started.elapsed(),
        };
    }

    // ========================================================================
    // STEP 3: VERIFY
    // ========================================================================
    let verification = if config.verify {
        verify_removed(probe, path, deadline)
    } else {
        Verification::Skipped
    };

    FileOutcome {
        path: path.to_path_buf(),
        findings_before,
        status: FileStatus::Stripped(verification),
        duration: started.elapsed(),
    }
}

fn verify_removed<P: MetadataProbe + ?Sized>(probe: &P, path: &Path, deadline: &Deadline) -> Verification {
    let snapshot = match probe.read_metadata(path, deadline) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("  Could not verify metadata removal: {}", e);
            return Verification::Unavailable(e.to_string());
        }
    };

    let remaining = classify(&snapshot, IgnorePolicy::PostStrip);
    if remaining.is_empty() {
        info!("  ✓ Metadata removed");
        Verification::Clean
    } else {
        warn!("  Metadata still present:");
        for finding in &remaining {
            warn!("    - {}", finding);
        }
        Verification::TagsRemaining(remaining)
    }
}

fn report_findings(findings: &[Finding]) {
    if findings.is_empty() {
        info!("  No metadata found");
        return;
    }
    info!("  Found metadata:");
    for finding in findings {
        info!("    - {}", finding);
    }
    info!("  Removing metadata...");
}

fn handle_orphans(paths: Vec<PathBuf>, remove: bool) -> Vec<OrphanedTempFile> {
    paths
        .into_iter()
        .map(|path| {
            if !remove {
                warn!(
                    "Leftover temporary file from an interrupted run: {} (kept; its original will not be stripped until it is removed)",
                    path.display()
                );
                return OrphanedTempFile { path, removed: false };
            }
            match fs::remove_file(&path) {
                Ok(()) => {
                    info!("Removed leftover temporary file: {}", path.display());
                    OrphanedTempFile { path, removed: true }
                }
                Err(e) => {
                    warn!("Failed to remove leftover temporary file {}: {}", path.display(), e);
                    OrphanedTempFile { path, removed: false }
                }
            }
        })
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
