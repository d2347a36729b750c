//! Implementation of the default (and only) command: strip metadata below a directory.
//!
//! Resolves the working directory, makes sure ffmpeg is usable and hands the
//! tree to metastrip-core.

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};

use metastrip_core::external::{FfprobeExecutor, SidecarTranscoder};
use metastrip_core::util::Deadline;
use metastrip_core::{CoreError, RunSummary, StripConfig, StripConfigBuilder, ensure_available, strip_directory};

use std::env;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

/// Resolves the directory to process: `--dir` if given, else the current directory.
///
/// The result is canonical and guaranteed to be a directory at the time of the call.
pub fn resolve_root(dir: Option<&Path>) -> CliResult<PathBuf> {
    let requested = match dir {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir().cli_context("Failed to resolve working directory")?,
    };

    let root = requested.canonicalize().map_err(|e| {
        CoreError::PathError(format!(
            "Failed to resolve working directory '{}': {}",
            requested.display(),
            e
        ))
    })?;

    if !root.is_dir() {
        return Err(CoreError::PathError(format!(
            "'{}' is not a directory",
            root.display()
        )));
    }
    Ok(root)
}

/// Builds the run configuration from parsed arguments.
pub fn build_config(cli: &Cli, root: PathBuf) -> CliResult<StripConfig> {
    let config = StripConfigBuilder::new()
        .root_dir(root)
        .verify(!cli.no_verify)
        .remove_orphaned_temp_files(cli.remove_orphans)
        .build();
    config.validate()?;
    Ok(config)
}

/// Runs the whole strip pipeline and returns its summary.
///
/// Errors returned here are fatal for the process; per-file failures are
/// only reflected in the summary.
pub fn run_strip(cli: &Cli) -> CliResult<RunSummary> {
    let started = Instant::now();

    // Path problems are reported before anything is installed.
    let root = resolve_root(cli.dir.as_deref())?;
    let config = build_config(cli, root)?;
    debug!("Configuration: {:?}", config);

    let deadline = Deadline::after(config.run_timeout);
    ensure_available(&config.tools, config.install_timeout, &deadline)?;

    let probe = FfprobeExecutor::new(config.tools.ffprobe.clone());
    let transcoder = SidecarTranscoder::new(config.tools.ffmpeg.clone());
    let summary = strip_directory(&probe, &transcoder, &config, &deadline)?;

    log_summary(&summary, started.elapsed());
    Ok(summary)
}

fn log_summary(summary: &RunSummary, elapsed: Duration) {
    info!("");
    if summary.outcomes.is_empty() && !summary.timed_out {
        info!("Processing complete");
        return;
    }

    info!(
        "Processing complete: {} stripped, {} failed ({:.1}s)",
        summary.stripped_count(),
        summary.failed_count(),
        elapsed.as_secs_f64()
    );
    if summary.unverified_count() > 0 {
        warn!(
            "{} file(s) could not be confirmed clean; see warnings above",
            summary.unverified_count()
        );
    }
    if summary.timed_out {
        warn!(
            "Stopped early: {} file(s) were not processed",
            summary.not_started.len()
        );
    }
}
