// ============================================================================
// metastrip-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe and ffmpeg
//
// The two operations metastrip needs from the outside world are expressed as
// traits so the batch driver can be exercised without the real binaries:
//
// - MetadataProbe: read container and stream tags (ffprobe)
// - Transcoder: write a metadata-free stream copy to a new path (ffmpeg)

// ---- Internal crate imports ----
use crate::error::CoreResult;
use crate::metadata::MetadataSnapshot;
use crate::util::Deadline;

// ---- Standard library imports ----
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Strip invocation built with ffmpeg-sidecar
pub mod ffmpeg_executor;

/// Metadata reading via ffprobe's JSON output
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_executor::SidecarTranscoder;
pub use ffprobe_executor::FfprobeExecutor;

// ============================================================================
// TRAITS
// ============================================================================

/// Something that can report the metadata of a media file.
pub trait MetadataProbe {
    /// Reads container and per-stream tags from `path`.
    ///
    /// Errors are file-scoped: the caller logs them and keeps going.
    fn read_metadata(&self, path: &Path, deadline: &Deadline) -> CoreResult<MetadataSnapshot>;
}

/// Something that can copy a media file's streams without their metadata.
pub trait Transcoder {
    /// Writes `input` to `output` with all metadata dropped and streams copied
    /// unchanged, overwriting `output` if it exists.
    fn strip(&self, input: &Path, output: &Path, deadline: &Deadline) -> CoreResult<()>;
}

impl<T: MetadataProbe + ?Sized> MetadataProbe for &T {
    fn read_metadata(&self, path: &Path, deadline: &Deadline) -> CoreResult<MetadataSnapshot> {
        (**self).read_metadata(path, deadline)
    }
}

impl<T: Transcoder + ?Sized> Transcoder for &T {
    fn strip(&self, input: &Path, output: &Path, deadline: &Deadline) -> CoreResult<()> {
        (**self).strip(input, output, deadline)
    }
}
