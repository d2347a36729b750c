// metastrip-core/tests/strip_tests.rs

mod common;

use common::{MockTranscoder, STRIPPED_CONTENT, TranscodeBehavior, create_dummy_file};
use metastrip_core::error::CoreError;
use metastrip_core::processing::strip_metadata;
use metastrip_core::util::Deadline;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

fn deadline() -> Deadline {
    Deadline::after(Duration::from_secs(30))
}

#[test]
fn test_successful_strip_replaces_original() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let video = create_dummy_file(dir.path(), "clip.mp4");
    let transcoder = MockTranscoder::new(TranscodeBehavior::WriteOutput);

    strip_metadata(&transcoder, &video, ".tmp", &deadline())?;

    assert_eq!(fs::read(&video)?, STRIPPED_CONTENT);
    assert!(!dir.path().join("clip.tmp.mp4").exists());
    assert_eq!(
        transcoder.calls(),
        vec![(video.clone(), dir.path().join("clip.tmp.mp4"))]
    );
    Ok(())
}

#[test]
fn test_failed_strip_leaves_original_and_no_temp() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let video = create_dummy_file(dir.path(), "clip.mkv");
    let transcoder = MockTranscoder::new(TranscodeBehavior::FailAfterPartialWrite);

    let err = strip_metadata(&transcoder, &video, ".tmp", &deadline()).unwrap_err();

    assert!(matches!(err, CoreError::StripFailed { .. }));
    assert_eq!(fs::read(&video)?, b"dummy content");
    assert!(!dir.path().join("clip.tmp.mkv").exists());
    Ok(())
}

#[test]
fn test_missing_output_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let video = create_dummy_file(dir.path(), "clip.avi");
    let transcoder = MockTranscoder::new(TranscodeBehavior::WriteNothing);

    let err = strip_metadata(&transcoder, &video, ".tmp", &deadline()).unwrap_err();

    assert!(matches!(err, CoreError::TempFileMissing(_)));
    assert_eq!(fs::read(&video)?, b"dummy content");
    Ok(())
}

#[test]
fn test_existing_temp_file_blocks_strip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let video = create_dummy_file(dir.path(), "clip.mov");
    let occupied = dir.path().join("clip.tmp.mov");
    fs::write(&occupied, b"stale")?;
    let transcoder = MockTranscoder::new(TranscodeBehavior::WriteOutput);

    let err = strip_metadata(&transcoder, &video, ".tmp", &deadline()).unwrap_err();

    assert!(matches!(err, CoreError::TempPathOccupied(ref path) if *path == occupied));
    assert!(transcoder.calls().is_empty());
    assert_eq!(fs::read(&video)?, b"dummy content");
    assert_eq!(fs::read(&occupied)?, b"stale");
    Ok(())
}

#[test]
fn test_stripping_twice_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let video = create_dummy_file(dir.path(), "nested/clip.webm");
    let transcoder = MockTranscoder::new(TranscodeBehavior::WriteOutput);

    strip_metadata(&transcoder, &video, ".tmp", &deadline())?;
    strip_metadata(&transcoder, &video, ".tmp", &deadline())?;

    assert_eq!(fs::read(&video)?, STRIPPED_CONTENT);
    assert_eq!(fs::read_dir(video.parent().unwrap())?.count(), 1);
    Ok(())
}
