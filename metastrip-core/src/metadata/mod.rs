//! Container and stream metadata as reported by ffprobe.
//!
//! A [`MetadataSnapshot`] is a read-only view of the tags in one file at one
//! point in time. Snapshots taken before and after stripping are compared only
//! through [`classify`].

pub mod classify;

pub use classify::{Finding, IgnorePolicy, TagScope, classify};

use crate::error::{CoreError, CoreResult};

use serde::Deserialize;
use std::collections::BTreeMap;

/// Key/value tags attached to a container or a stream.
pub type Tags = BTreeMap<String, String>;

/// Container-level tags plus per-stream tags in stream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataSnapshot {
    container: Tags,
    streams: Vec<Tags>,
}

impl MetadataSnapshot {
    pub fn new(container: Tags, streams: Vec<Tags>) -> Self {
        Self { container, streams }
    }

    /// Parses the JSON printed by `ffprobe -print_format json -show_format -show_streams`.
    pub fn from_ffprobe_json(bytes: &[u8]) -> CoreResult<Self> {
        let raw: RawProbeOutput = serde_json::from_slice(bytes)
            .map_err(|e| CoreError::JsonParse(format!("ffprobe metadata: {e}")))?;

        Ok(Self {
            container: raw.format.and_then(|f| f.tags).unwrap_or_default(),
            streams: raw
                .streams
                .into_iter()
                .map(|s| s.tags.unwrap_or_default())
                .collect(),
        })
    }

    pub fn container(&self) -> &Tags {
        &self.container
    }

    pub fn streams(&self) -> &[Tags] {
        &self.streams
    }
}

// ffprobe omits `tags` entirely when a section has none.
#[derive(Debug, Deserialize)]
struct RawProbeOutput {
    #[serde(default)]
    format: Option<RawSection>,
    #[serde(default)]
    streams: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    #[serde(default)]
    tags: Option<Tags>,
}
