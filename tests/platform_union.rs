#[path = "common/mod.rs"]
mod common;

use common::*;
use narrfreq::{analyze_platform, union_vocab};

/// Vocabularies union across datatypes while counts stay per-datatype.
#[test]
fn platform_report_unions_vocab_and_keeps_counts_separate() {
    let data = vec![
        (
            "videos".to_string(),
            vec![
                labeled_record(&["wh-chem", "wh-rescue"]),
                labeled_record(&["wh-chem"]),
                labeled_record(&[""]),
            ],
        ),
        ("comments".to_string(), vec![labeled_record(&["wh-rescue"])]),
    ];

    let report = analyze_platform(&data, "youtube");
    assert_eq!(report.platform, "youtube");
    assert_eq!(report.datatype_names(), vec!["videos", "comments"]);

    let labels: Vec<&str> = report.labels.iter().map(|s| s.as_str()).collect();
    assert_eq!(labels, vec!["wh-chem", "wh-rescue"]);
    let comps: Vec<&str> = report.components.iter().map(|s| s.as_str()).collect();
    assert_eq!(comps, vec!["chem", "rescue", "wh"]);

    // No cross-datatype normalization: each datatype keeps its own counts.
    let videos = &report.datatypes[0].1;
    let comments = &report.datatypes[1].1;
    assert_eq!(videos.label_freq["wh-chem"], 2);
    assert_eq!(videos.label_freq["wh-rescue"], 1);
    assert!(!comments.label_freq.contains_key("wh-chem"));
    assert_eq!(comments.label_freq["wh-rescue"], 1);
}

/// A fully-unlabeled datatype contributes nothing to the vocabularies but
/// still appears in the per-datatype results.
#[test]
fn unlabeled_datatype_contributes_no_vocab() {
    let data = vec![
        ("tweets".to_string(), vec![labeled_record(&["wh-chem"])]),
        ("botometer_en".to_string(), vec![bare_record(), bare_record()]),
    ];

    let report = analyze_platform(&data, "twitter");
    assert_eq!(report.datatypes.len(), 2);
    assert_eq!(report.labels.len(), 1);
    assert_eq!(report.components.len(), 2);

    let bot = &report.datatypes[1].1;
    assert_eq!(bot.unlabeled, 2);
    assert!(bot.label_freq.is_empty());
}

/// Cross-platform union is the row set for CSV export.
#[test]
fn union_vocab_spans_platforms() {
    let yt = analyze_platform(
        &[("videos".to_string(), vec![labeled_record(&["wh-chem"])])],
        "youtube",
    );
    let tw = analyze_platform(
        &[("tweets".to_string(), vec![labeled_record(&["wh-rescue", "other-x"])])],
        "twitter",
    );

    let (labels, comps) = union_vocab([&yt, &tw]);
    let labels: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();
    assert_eq!(labels, vec!["other-x", "wh-chem", "wh-rescue"]);
    let comps: Vec<&str> = comps.iter().map(|s| s.as_str()).collect();
    assert_eq!(comps, vec!["chem", "other", "rescue", "wh", "x"]);
}
