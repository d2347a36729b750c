//! FFprobe integration for reading container and stream tags.

use crate::error::CoreResult;
use crate::external::MetadataProbe;
use crate::metadata::MetadataSnapshot;
use crate::util::{Deadline, run_captured};

use std::path::{Path, PathBuf};
use std::process::Command;

/// [`MetadataProbe`] backed by the ffprobe binary.
#[derive(Debug, Clone)]
pub struct FfprobeExecutor {
    program: PathBuf,
}

impl FfprobeExecutor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-v", "quiet", "-print_format", "json", "-show_format", "-show_streams"])
            .arg(path);
        cmd
    }
}

impl Default for FfprobeExecutor {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FFPROBE_BIN)
    }
}

impl MetadataProbe for FfprobeExecutor {
    fn read_metadata(&self, path: &Path, deadline: &Deadline) -> CoreResult<MetadataSnapshot> {
        log::debug!("Running ffprobe for metadata on: {}", path.display());
        let output = run_captured(&mut self.command(path), deadline)?;
        MetadataSnapshot::from_ffprobe_json(&output.stdout)
    }
}
