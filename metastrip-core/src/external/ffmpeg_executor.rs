// ============================================================================
// metastrip-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Metadata-stripping stream copy
//
// Builds the ffmpeg invocation with ffmpeg-sidecar's FfmpegCommand and runs
// it under the run deadline. ffmpeg's own stdout/stderr are inherited so its
// error messages reach the user directly; `-loglevel error` keeps that quiet
// unless something actually goes wrong.

use crate::error::{CoreResult, command_failed_error};
use crate::external::Transcoder;
use crate::util::{Deadline, run_with_deadline};

use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// [`Transcoder`] that shells out to ffmpeg.
#[derive(Debug, Clone)]
pub struct SidecarTranscoder {
    program: PathBuf,
}

impl SidecarTranscoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `ffmpeg -loglevel error -i <input> -map_metadata -1 -c copy -y <output>`
    fn command(&self, input: &Path, output: &Path) -> FfmpegCommand {
        let mut cmd = FfmpegCommand::new_with_path(&self.program);
        cmd.hide_banner();
        // Overrides the sidecar's default `-loglevel level+info`; ffmpeg applies the last one.
        cmd.args(["-loglevel", "error"]);
        cmd.input(input);
        cmd.args(["-map_metadata", "-1"]); // Drop global, stream and chapter metadata
        cmd.args(["-c", "copy"]); // Stream copy, no re-encode
        cmd.overwrite();
        cmd.output(output);
        cmd
    }
}

impl Default for SidecarTranscoder {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FFMPEG_BIN)
    }
}

impl Transcoder for SidecarTranscoder {
    fn strip(&self, input: &Path, output: &Path, deadline: &Deadline) -> CoreResult<()> {
        let mut ffmpeg = self.command(input, output);
        let cmd = ffmpeg
            .as_inner_mut()
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = run_with_deadline(cmd, deadline)?;
        if !status.success() {
            log::error!("ffmpeg exited with {} for {}", status, input.display());
            return Err(command_failed_error(
                "ffmpeg (strip metadata)",
                status,
                "see ffmpeg output above",
            ));
        }
        Ok(())
    }
}
