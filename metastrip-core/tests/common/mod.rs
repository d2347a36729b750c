// metastrip-core/tests/common/mod.rs
//
// Shared test doubles for the MetadataProbe and Transcoder seams.

#![allow(dead_code)]

use metastrip_core::error::{CoreError, CoreResult};
use metastrip_core::external::{MetadataProbe, Transcoder};
use metastrip_core::metadata::{MetadataSnapshot, Tags};
use metastrip_core::util::Deadline;

use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

pub const STRIPPED_CONTENT: &[u8] = b"stripped content";

pub fn create_dummy_file(dir: &Path, relative: &str) -> PathBuf {
    let file_path = dir.join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    let mut file = File::create(&file_path).expect("Failed to create dummy file");
    file.write_all(b"dummy content").expect("Failed to write dummy content");
    file_path
}

pub fn tags(pairs: &[(&str, &str)]) -> Tags {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn snapshot(container: &[(&str, &str)], streams: &[&[(&str, &str)]]) -> MetadataSnapshot {
    MetadataSnapshot::new(tags(container), streams.iter().map(|s| tags(s)).collect())
}

#[derive(Debug, Clone, Copy)]
pub enum TranscodeBehavior {
    /// Writes `STRIPPED_CONTENT` to the output path.
    WriteOutput,
    /// Writes a partial output, then reports a non-zero exit.
    FailAfterPartialWrite,
    /// Reports success without creating the output.
    WriteNothing,
    /// Sleeps, then writes the output.
    Slow(Duration),
}

/// Records every strip call and answers with a fixed behavior.
pub struct MockTranscoder {
    behavior: TranscodeBehavior,
    calls: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl MockTranscoder {
    pub fn new(behavior: TranscodeBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transcoder for MockTranscoder {
    fn strip(&self, input: &Path, output: &Path, _deadline: &Deadline) -> CoreResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((input.to_path_buf(), output.to_path_buf()));

        match self.behavior {
            TranscodeBehavior::WriteOutput => {
                fs::write(output, STRIPPED_CONTENT)?;
                Ok(())
            }
            TranscodeBehavior::FailAfterPartialWrite => {
                fs::write(output, b"partial")?;
                Err(CoreError::OperationFailed(
                    "ffmpeg exited with status 1".to_string(),
                ))
            }
            TranscodeBehavior::WriteNothing => Ok(()),
            TranscodeBehavior::Slow(delay) => {
                thread::sleep(delay);
                fs::write(output, STRIPPED_CONTENT)?;
                Ok(())
            }
        }
    }
}

/// Hands out queued responses in call order; an empty queue yields an empty snapshot.
pub struct MockProbe {
    responses: Mutex<VecDeque<CoreResult<MetadataSnapshot>>>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockProbe {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn push_snapshot(&self, snapshot: MetadataSnapshot) {
        self.responses.lock().unwrap().push_back(Ok(snapshot));
    }

    pub fn push_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(CoreError::JsonParse(message.to_string())));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl MetadataProbe for MockProbe {
    fn read_metadata(&self, path: &Path, _deadline: &Deadline) -> CoreResult<MetadataSnapshot> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(MetadataSnapshot::default()))
    }
}
