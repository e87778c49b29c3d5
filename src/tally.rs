//! Narrative-label tallier: single-pass reducers over one datatype's records.

use crate::record::{components, Record};
use ahash::AHashMap;

/// Frequency results for one datatype.
/// When the datatype carries no narrative extension at all, `unlabeled` equals
/// `total` and both frequency tables are empty.
#[derive(Debug, Clone, Default)]
pub struct DatatypeTally {
    pub total: u64,
    pub unlabeled: u64,
    pub label_freq: AHashMap<String, u64>,
    pub comp_freq: AHashMap<String, u64>,
}

impl DatatypeTally {
    /// Records that carry at least a non-empty label entry.
    pub fn labeled(&self) -> u64 {
        self.total.saturating_sub(self.unlabeled)
    }
}

/// Tally narrative labels over one datatype.
///
/// A record whose first label entry is the empty string counts as unlabeled.
/// Every label string increments the label table; every hyphen segment of it
/// increments the component table. Any record without an `extension` marks the
/// whole datatype as unlabeled and ends the pass early.
pub fn tally_records(records: &[Record], datatype: &str) -> DatatypeTally {
    let total = records.len() as u64;
    let mut unlabeled = 0u64;
    let mut label_freq: AHashMap<String, u64> = AHashMap::new();
    let mut comp_freq: AHashMap<String, u64> = AHashMap::new();

    for record in records {
        let Some(labels) = record.labels() else {
            tracing::info!(datatype, objects = total, "no narrative labels for datatype");
            return DatatypeTally { total, unlabeled: total, ..Default::default() };
        };
        if labels.first().map_or(false, |l| l.is_empty()) {
            unlabeled += 1;
        }
        for label in labels {
            *label_freq.entry(label.clone()).or_insert(0) += 1;
            for comp in components(label) {
                *comp_freq.entry(comp.to_string()).or_insert(0) += 1;
            }
        }
    }

    // Drop the empty-string placeholder from both tables.
    label_freq.remove("");
    comp_freq.remove("");

    let tally = DatatypeTally { total, unlabeled, label_freq, comp_freq };
    let frac = if total > 0 { tally.labeled() as f64 / total as f64 } else { 0.0 };
    tracing::info!(
        datatype,
        objects = total,
        labeled = tally.labeled(),
        labeled_frac = format!("{frac:.3}").as_str(),
        unique_labels = tally.label_freq.len(),
        unique_components = tally.comp_freq.len(),
        "datatype tally"
    );
    tally
}
