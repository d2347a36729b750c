//! File discovery module for finding video files to process.
//!
//! Walks the whole tree below the root directory and keeps regular files whose
//! extension is in the configured allow-list. It also recognises temp files
//! left behind by an interrupted run, so they are not mistaken for videos.

use crate::error::CoreResult;
use crate::temp_files::original_path_for;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds video files in `root` and all of its subdirectories.
///
/// Entries are visited in lexicographic order per directory level, so the
/// result is stable for an unchanged tree. Symlinks are not followed and
/// directories are never returned, whatever their name. `extensions` holds
/// lowercase extensions with their leading dot.
///
/// # Errors
///
/// * `Err(CoreError::Walkdir)` - If any entry cannot be read (e.g. permission denied)
///
/// # Examples
///
/// ```rust,no_run
/// use metastrip_core::config::default_extensions;
/// use metastrip_core::find_video_files;
/// use std::path::Path;
///
/// let files = find_video_files(Path::new("/path/to/videos"), &default_extensions()).unwrap();
/// for file in files {
///     println!("{}", file.display());
/// }
/// ```
pub fn find_video_files(root: &Path, extensions: &BTreeSet<String>) -> CoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if has_video_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    log::debug!("Discovered {} video file(s) under {}", files.len(), root.display());
    Ok(files)
}

/// Splits discovered paths into videos to process and orphaned temp files.
///
/// A path is an orphan when its base name ends with `temp_marker` and the
/// original it would replace (`clip.tmp.mp4` -> `clip.mp4`) still exists.
/// Files that merely contain the marker but have no such sibling are treated as
/// ordinary videos.
pub fn partition_orphaned_temp_files(
    files: Vec<PathBuf>,
    temp_marker: &str,
) -> (Vec<PathBuf>, Vec<PathBuf>) {
    files.into_iter().partition(|path| {
        !original_path_for(path, temp_marker).is_some_and(|original| original.is_file())
    })
}

fn has_video_extension(path: &Path, extensions: &BTreeSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&format!(".{}", ext.to_lowercase())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_extensions;

    #[test]
    fn test_has_video_extension_is_case_insensitive() {
        let extensions = default_extensions();
        assert!(has_video_extension(Path::new("clip.MP4"), &extensions));
        assert!(has_video_extension(Path::new("dir/movie.WebM"), &extensions));
        assert!(!has_video_extension(Path::new("notes.txt"), &extensions));
        assert!(!has_video_extension(Path::new("mp4"), &extensions));
    }
}
