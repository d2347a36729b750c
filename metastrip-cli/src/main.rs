// metastrip-cli/src/main.rs
//
// Entry point for the metastrip binary.
//
// Responsibilities:
// - Parsing arguments
// - Installing the logger (console, optionally file)
// - Running the strip command
// - Mapping fatal errors and an expired run deadline to exit status 1

use clap::Parser;
use console::style;
use log::LevelFilter;
use metastrip::logging::setup_logging;
use metastrip::{Cli, run_strip};
use std::process;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = setup_logging(level, cli.log_file.as_deref()) {
        fail(&format!("{e:#}"));
    }

    match run_strip(&cli) {
        Ok(summary) if summary.timed_out => {
            fail("Run timed out before all files were processed");
        }
        Ok(_) => {}
        Err(e) => {
            log::debug!("Fatal error: {:?}", e);
            fail(&e.to_string());
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", style(format!("Error: {message}")).red().bold());
    process::exit(1);
}
