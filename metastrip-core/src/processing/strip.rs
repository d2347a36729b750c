//! The strip-and-replace sequence for a single file.
//!
//! 1. Reserve the sibling temp path (`clip.tmp.mp4`), refusing if it is taken.
//! 2. Ask the transcoder to write a metadata-free stream copy there.
//! 3. Check the output exists, then rename it over the original.
//!
//! The rename is the only mutation of the original and stays on one
//! filesystem, so an interruption before it leaves the original untouched.

use crate::error::{CoreError, CoreResult};
use crate::external::Transcoder;
use crate::temp_files::TempSlot;
use crate::util::Deadline;

use std::path::Path;

/// Strips all metadata from `path` in place.
///
/// No temp file survives this call: on success it has been renamed over
/// `path`, on failure the slot guard removes it.
///
/// # Errors
///
/// * `TempPathOccupied` - a file already exists at the temp path; nothing is touched
/// * `StripFailed` - the transcoder failed, timed out or could not be started
/// * `TempFileMissing` - the transcoder reported success but wrote nothing
/// * `ReplaceFailed` - the rename over the original failed
pub fn strip_metadata<T: Transcoder + ?Sized>(
    transcoder: &T,
    path: &Path,
    temp_marker: &str,
    deadline: &Deadline,
) -> CoreResult<()> {
    let slot = TempSlot::acquire(path, temp_marker)?;
    log::debug!("Writing stripped copy of {} to {}", path.display(), slot.path().display());

    transcoder
        .strip(path, slot.path(), deadline)
        .map_err(|source| CoreError::StripFailed {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;

    slot.commit(path)
}
