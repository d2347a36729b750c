// metastrip-core/tests/classify_tests.rs

mod common;

use common::snapshot;
use metastrip_core::metadata::{IgnorePolicy, MetadataSnapshot, TagScope, classify};

fn rendered(snapshot: &MetadataSnapshot, policy: IgnorePolicy) -> Vec<String> {
    classify(snapshot, policy).iter().map(|f| f.to_string()).collect()
}

#[test]
fn test_pre_strip_reports_tracked_keys_in_priority_order() {
    let snap = snapshot(
        &[
            ("title", "Holiday"),
            ("creation_time", "2024-01-01T00:00:00.000000Z"),
            ("major_brand", "isom"),
            ("encoder", "Lavf60.3.100"),
        ],
        &[&[("encoder", "Lavc60 libx264"), ("language", "eng")]],
    );

    assert_eq!(
        rendered(&snap, IgnorePolicy::PreStrip),
        vec![
            "creation_time: 2024-01-01T00:00:00.000000Z",
            "encoder: Lavf60.3.100",
            "title: Holiday",
            "stream[0].encoder: Lavc60 libx264",
        ]
    );
}

#[test]
fn test_post_strip_ignores_technical_and_ffmpeg_tags() {
    let snap = snapshot(
        &[
            ("major_brand", "isom"),
            ("minor_version", "512"),
            ("compatible_brands", "isomiso2avc1mp41"),
            ("encoder", "Lavf60.3.100"),
        ],
        &[&[("encoder", "Lavc60.3.100 libx264")], &[("handler_name", "SoundHandler")]],
    );

    assert!(classify(&snap, IgnorePolicy::PostStrip).is_empty());
}

#[test]
fn test_post_strip_reports_foreign_encoder_and_untracked_keys() {
    let snap = snapshot(
        &[
            ("major_brand", "isom"),
            ("location", "+37.7749-122.4194/"),
            ("encoder", "HandBrake 1.6"),
        ],
        &[&[("creation_time", "2023-05-05T10:00:00Z")]],
    );

    assert_eq!(
        rendered(&snap, IgnorePolicy::PostStrip),
        vec![
            "encoder: HandBrake 1.6",
            "location: +37.7749-122.4194/",
            "stream[0].creation_time: 2023-05-05T10:00:00Z",
        ]
    );
}

#[test]
fn test_empty_values_are_never_reported() {
    let snap = snapshot(&[("title", ""), ("comment", "")], &[&[("timecode", "")]]);

    assert!(classify(&snap, IgnorePolicy::PreStrip).is_empty());
    assert!(classify(&snap, IgnorePolicy::PostStrip).is_empty());
}

#[test]
fn test_stream_findings_keep_stream_index() {
    let snap = snapshot(&[], &[&[], &[("timecode", "00:00:00:00")]]);
    let findings = classify(&snap, IgnorePolicy::PreStrip);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].scope, TagScope::Stream(1));
    assert_eq!(findings[0].key, "timecode");
}

#[test]
fn test_post_strip_is_subset_of_unfiltered_tags() {
    let snap = snapshot(
        &[("artist", "Someone"), ("major_brand", "mp42"), ("custom", "x")],
        &[&[("encoder", "Lavc"), ("timecode", "01:00:00:00")]],
    );

    let findings = classify(&snap, IgnorePolicy::PostStrip);
    for finding in &findings {
        let tags = match finding.scope {
            TagScope::Container => snap.container(),
            TagScope::Stream(i) => &snap.streams()[i],
        };
        assert_eq!(tags.get(&finding.key), Some(&finding.value));
    }
    assert_eq!(findings.len(), 3);
}

#[test]
fn test_pre_strip_reports_creation_time_before_foreign_encoder() {
    let snap = snapshot(
        &[("encoder", "HandBrake 1.6"), ("creation_time", "2024-02-02T12:00:00Z")],
        &[],
    );

    assert_eq!(
        rendered(&snap, IgnorePolicy::PreStrip),
        vec!["creation_time: 2024-02-02T12:00:00Z", "encoder: HandBrake 1.6"]
    );
}
