#![allow(dead_code)]

use flate2::write::GzEncoder;
use flate2::Compression;
use narrfreq::Record;
use serde_json::{json, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write a gzip `.json.gz` file containing the provided JSONL lines.
/// Mirrors the SocialSim dump files but with tiny content.
pub fn write_gz_lines(path: &Path, lines: &[String]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let f = File::create(path).unwrap();
    let mut enc = GzEncoder::new(f, Compression::default());
    for l in lines {
        writeln!(&mut enc, "{}", l).unwrap();
    }
    enc.finish().unwrap();
}

/// Write a gzip file whose payload is a single pretty-printed JSON array.
pub fn write_gz_json_array(path: &Path, values: &[Value]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let f = File::create(path).unwrap();
    let mut enc = GzEncoder::new(f, Compression::default());
    let text = serde_json::to_string_pretty(&Value::Array(values.to_vec())).unwrap();
    enc.write_all(text.as_bytes()).unwrap();
    enc.finish().unwrap();
}

/// A record carrying the given narrative labels in its extension.
pub fn labeled_record(labels: &[&str]) -> Record {
    serde_json::from_value(json!({
        "id_h": "abc123",
        "extension": { "socialsim_information_id": labels }
    }))
    .unwrap()
}

/// A record with no extension block at all (no narrative metadata).
pub fn bare_record() -> Record {
    serde_json::from_value(json!({ "id_h": "abc123", "text_m": "hello" })).unwrap()
}

/// JSON line for a record with the given labels plus arbitrary extra fields.
pub fn record_line(labels: &[&str], extra: Value) -> String {
    let mut obj = json!({ "extension": { "socialsim_information_id": labels } });
    if let (Some(dst), Some(src)) = (obj.as_object_mut(), extra.as_object()) {
        for (k, v) in src {
            dst.insert(k.clone(), v.clone());
        }
    }
    obj.to_string()
}

/// Build a tiny two-datatype platform corpus under a temp dir:
/// - `videos`: two labeled records ("wh-chem" twice via one double-label
///   record, "wh-rescue" once) and one unlabeled record.
/// - `comments`: one "wh-rescue" record.
/// Returns (base_dir, file table entries).
pub fn make_platform_corpus() -> (PathBuf, Vec<(String, PathBuf)>) {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.into_path();

    let videos = base.join("videos.json.gz");
    write_gz_lines(
        &videos,
        &[
            record_line(&["wh-chem", "wh-rescue"], json!({"id_h": "v1"})),
            record_line(&["wh-chem"], json!({"id_h": "v2"})),
            record_line(&[""], json!({"id_h": "v3"})),
        ],
    );

    let comments = base.join("comments.json.gz");
    write_gz_lines(&comments, &[record_line(&["wh-rescue"], json!({"id_h": "c1"}))]);

    let files = vec![
        ("videos".to_string(), videos),
        ("comments".to_string(), comments),
    ];
    (base, files)
}

/// Read a CSV file back into (header, rows) string vectors.
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader
        .headers()
        .unwrap()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
        .collect();
    (header, rows)
}
