//! Classification of metadata tags into reportable findings.
//!
//! The same snapshot is read twice per file. Before stripping, every tracked
//! tag is reported so the user sees what is about to be removed. After
//! stripping, tags that ffmpeg writes on its own (brand markers and its `Lavf`
//! encoder stamp) are ignored, so only genuine leftovers are flagged.

use std::fmt;

use super::{MetadataSnapshot, Tags};

/// Container tags in the order they are reported.
pub const CONTAINER_PRIORITY: &[&str] = &[
    "creation_time",
    "encoder",
    "comment",
    "title",
    "artist",
    "album",
    "date",
    "description",
];

/// Stream tags inspected in either policy.
pub const STREAM_KEYS: &[&str] = &["creation_time", "encoder", "timecode"];

/// Container tags describing the container structure itself.
pub const TECHNICAL_CONTAINER_TAGS: &[&str] = &["major_brand", "minor_version", "compatible_brands"];

/// Prefix of the container `encoder` value written by libavformat.
pub const MUXER_ENCODER_PREFIX: &str = "Lavf";

/// Prefix of stream `encoder` values written by libavformat/libavcodec.
pub const STREAM_ENCODER_PREFIX: &str = "Lav";

/// Which tags count as noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnorePolicy {
    /// Before stripping: nothing is ignored.
    PreStrip,
    /// After stripping: technical tags and ffmpeg's own encoder stamps are ignored.
    PostStrip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagScope {
    Container,
    Stream(usize),
}

/// One discovered tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub scope: TagScope,
    pub key: String,
    pub value: String,
}

impl Finding {
    fn new(scope: TagScope, key: &str, value: &str) -> Self {
        Self {
            scope,
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scope {
            TagScope::Container => write!(f, "{}: {}", self.key, self.value),
            TagScope::Stream(index) => write!(f, "stream[{}].{}: {}", index, self.key, self.value),
        }
    }
}

/// Maps a snapshot to the ordered list of findings under `policy`.
///
/// Container findings come first, then stream findings in stream order.
///
/// # Examples
///
/// ```rust
/// use metastrip_core::metadata::{IgnorePolicy, MetadataSnapshot, classify};
/// use std::collections::BTreeMap;
///
/// let container = BTreeMap::from([
///     ("major_brand".to_string(), "isom".to_string()),
///     ("title".to_string(), "Vacation".to_string()),
/// ]);
/// let snapshot = MetadataSnapshot::new(container, Vec::new());
///
/// let findings = classify(&snapshot, IgnorePolicy::PostStrip);
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].to_string(), "title: Vacation");
/// ```
pub fn classify(snapshot: &MetadataSnapshot, policy: IgnorePolicy) -> Vec<Finding> {
    let mut findings = match policy {
        IgnorePolicy::PreStrip => tracked_container_findings(snapshot.container()),
        IgnorePolicy::PostStrip => remaining_container_findings(snapshot.container()),
    };

    for (index, tags) in snapshot.streams().iter().enumerate() {
        for key in STREAM_KEYS {
            let Some(value) = non_empty(tags, key) else {
                continue;
            };
            if policy == IgnorePolicy::PostStrip
                && *key == "encoder"
                && value.starts_with(STREAM_ENCODER_PREFIX)
            {
                continue;
            }
            findings.push(Finding::new(TagScope::Stream(index), key, value));
        }
    }

    findings
}

fn tracked_container_findings(tags: &Tags) -> Vec<Finding> {
    CONTAINER_PRIORITY
        .iter()
        .filter_map(|key| non_empty(tags, key).map(|value| Finding::new(TagScope::Container, key, value)))
        .collect()
}

fn remaining_container_findings(tags: &Tags) -> Vec<Finding> {
    let is_noise = |key: &str, value: &str| {
        TECHNICAL_CONTAINER_TAGS.contains(&key)
            || (key == "encoder" && value.starts_with(MUXER_ENCODER_PREFIX))
    };

    // Priority keys first, then everything else in key order.
    let prioritized = CONTAINER_PRIORITY
        .iter()
        .filter_map(|key| tags.get_key_value(*key));
    let rest = tags
        .iter()
        .filter(|(key, _)| !CONTAINER_PRIORITY.contains(&key.as_str()));

    prioritized
        .chain(rest)
        .filter(|(key, value)| !value.is_empty() && !is_noise(key.as_str(), value.as_str()))
        .map(|(key, value)| Finding::new(TagScope::Container, key, value))
        .collect()
}

fn non_empty<'a>(tags: &'a Tags, key: &str) -> Option<&'a str> {
    tags.get(key).map(String::as_str).filter(|value| !value.is_empty())
}
