//! CSV export of label/component frequency tables.
//! One row per entry of the cross-platform union, one `<datatype>_freq` column
//! per datatype, 0 where a datatype never saw the key.

use crate::platform::PlatformReport;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Write `<stem>_narrative_labels.csv` and `<stem>_narrative_components.csv`
/// under `out_dir`. Returns both paths (labels first).
pub fn write_frequency_csvs(
    report: &PlatformReport,
    union_labels: &BTreeSet<String>,
    union_components: &BTreeSet<String>,
    out_dir: &Path,
    stem: &str,
    write_buf_bytes: usize,
) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;

    let labels_path = out_dir.join(format!("{stem}_narrative_labels.csv"));
    let comps_path = out_dir.join(format!("{stem}_narrative_components.csv"));

    write_table(report, union_labels, &labels_path, "narrative_label", write_buf_bytes, |t| {
        &t.label_freq
    })?;
    write_table(report, union_components, &comps_path, "narrative_components", write_buf_bytes, |t| {
        &t.comp_freq
    })?;

    tracing::info!(
        platform = report.platform.as_str(),
        labels = %labels_path.display(),
        components = %comps_path.display(),
        "wrote frequency CSVs"
    );
    Ok((labels_path, comps_path))
}

fn write_table(
    report: &PlatformReport,
    union_keys: &BTreeSet<String>,
    out_path: &Path,
    key_header: &str,
    write_buf_bytes: usize,
    table: impl Fn(&crate::tally::DatatypeTally) -> &ahash::AHashMap<String, u64>,
) -> Result<()> {
    let file = File::create(out_path).with_context(|| format!("create {}", out_path.display()))?;
    let mut wtr = csv::Writer::from_writer(BufWriter::with_capacity(write_buf_bytes, file));

    let mut header = vec![key_header.to_string()];
    header.extend(report.datatypes.iter().map(|(name, _)| format!("{name}_freq")));
    wtr.write_record(&header)?;

    let mut row = Vec::with_capacity(header.len());
    for key in union_keys {
        row.clear();
        row.push(key.clone());
        for (_, tally) in &report.datatypes {
            let count = table(tally).get(key).copied().unwrap_or(0);
            row.push(count.to_string());
        }
        wtr.write_record(&row)?;
    }
    wtr.flush().with_context(|| format!("flush {}", out_path.display()))?;
    Ok(())
}
