// ============================================================================
// metastrip-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: fern dispatcher for console and optional file output
//
// The core library only emits records through the `log` facade. This module
// installs the single global logger for the binary:
// - stdout: timestamped lines with a coloured level tag
// - file (optional): the same lines without colour codes
//
// Info is the default level; --verbose raises it to Debug.

use anyhow::Context;
use console::style;
use log::{Level, LevelFilter};
use std::path::Path;

fn line_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

fn styled_level(level: Level) -> String {
    let tag = format!("{:<5}", level);
    match level {
        Level::Error => style(tag).red().bold().to_string(),
        Level::Warn => style(tag).yellow().to_string(),
        Level::Info => style(tag).green().to_string(),
        Level::Debug => style(tag).cyan().to_string(),
        Level::Trace => style(tag).magenta().to_string(),
    }
}

/// Installs the global logger. Must be called once, before any logging.
pub fn setup_logging(level: LevelFilter, log_file: Option<&Path>) -> anyhow::Result<()> {
    let console = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} {}",
                style(line_timestamp()).dim(),
                styled_level(record.level()),
                message
            ))
        })
        .chain(std::io::stdout());

    let mut dispatch = fern::Dispatch::new().level(level).chain(console);

    if let Some(path) = log_file {
        let file = fern::log_file(path)
            .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} [{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
    }

    dispatch.apply().context("Failed to initialise logger")?;
    Ok(())
}
