// metastrip-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "metastrip: Recursive video metadata removal",
    long_about = "Removes all embedded metadata from every video below a directory, \
                  in place and without re-encoding, using ffmpeg via metastrip-core."
)]
pub struct Cli {
    /// Directory to process (defaults to the current working directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Skip reading metadata before and after stripping
    #[arg(long, default_value_t = false)]
    pub no_verify: bool,

    /// Delete temp files left behind by an interrupted run
    #[arg(long, default_value_t = false)]
    pub remove_orphans: bool,

    /// Enable debug-level logging, including every external command line
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Also write plain-text logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["metastrip"]);
        assert!(cli.dir.is_none());
        assert!(!cli.no_verify);
        assert!(!cli.remove_orphans);
        assert!(!cli.verbose);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "metastrip",
            "-d",
            "videos",
            "--no-verify",
            "--remove-orphans",
            "-v",
            "--log-file",
            "run.log",
        ]);
        assert_eq!(cli.dir, Some(PathBuf::from("videos")));
        assert!(cli.no_verify);
        assert!(cli.remove_orphans);
        assert!(cli.verbose);
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["metastrip", "somewhere"]).is_err());
    }
}
