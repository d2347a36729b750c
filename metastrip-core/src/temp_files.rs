//! Temporary file management for the strip-and-replace sequence.
//!
//! ffmpeg writes its output next to the original, under the same extension
//! (ffmpeg picks the container from it), with a marker in the base name. The
//! [`TempSlot`] guard owns that path: whatever happens, the temp file is either
//! renamed over the original or removed when the guard is dropped.

use crate::error::{CoreError, CoreResult};

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the sibling temp path for `original`: `dir/clip.mp4` -> `dir/clip.tmp.mp4`.
pub fn temp_path_for(original: &Path, marker: &str) -> PathBuf {
    let mut name = original
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(marker);
    if let Some(ext) = original.extension() {
        name.push(".");
        name.push(ext);
    }
    original.with_file_name(name)
}

/// Inverse of [`temp_path_for`]. Returns `None` when `temp` does not carry the marker.
pub fn original_path_for(temp: &Path, marker: &str) -> Option<PathBuf> {
    let stem = temp.file_stem()?.to_str()?;
    let base = stem.strip_suffix(marker).filter(|base| !base.is_empty())?;
    let name = match temp.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{base}.{ext}"),
        None => base.to_string(),
    };
    Some(temp.with_file_name(name))
}

/// Ownership of one sibling temp path for the duration of a strip.
#[derive(Debug)]
pub struct TempSlot {
    path: PathBuf,
}

impl TempSlot {
    /// Reserves the temp path for `original`. Nothing is created on disk.
    ///
    /// Fails with `TempPathOccupied` if a file already sits at that path; it is
    /// never overwritten or removed by the slot.
    pub fn acquire(original: &Path, marker: &str) -> CoreResult<Self> {
        let path = temp_path_for(original, marker);
        if fs::symlink_metadata(&path).is_ok() {
            return Err(CoreError::TempPathOccupied(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Moves the temp file over `original`, consuming the slot.
    ///
    /// Fails with `TempFileMissing` if the tool reported success without
    /// producing output. On any failure the slot's drop removes leftovers.
    pub fn commit(self, original: &Path) -> CoreResult<()> {
        if !self.path.is_file() {
            return Err(CoreError::TempFileMissing(self.path.clone()));
        }
        fs::rename(&self.path, original).map_err(|source| CoreError::ReplaceFailed {
            original: original.to_path_buf(),
            temp: self.path.clone(),
            source,
        })
    }
}

impl Drop for TempSlot {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => log::debug!("Removed temporary file {}", self.path.display()),
            Err(e) => log::warn!(
                "Failed to remove temporary file {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
