//! Platform-level aggregation: per-datatype tallies plus unioned vocabularies.

use crate::record::Record;
use crate::tally::{tally_records, DatatypeTally};
use std::collections::BTreeSet;

/// Tallies for every datatype of one platform, in configured order, plus the
/// platform-wide label/component vocabularies. Counts stay per-datatype; no
/// cross-datatype normalization happens here.
#[derive(Debug, Clone)]
pub struct PlatformReport {
    pub platform: String,
    pub datatypes: Vec<(String, DatatypeTally)>,
    pub labels: BTreeSet<String>,
    pub components: BTreeSet<String>,
}

impl PlatformReport {
    pub fn datatype_names(&self) -> Vec<&str> {
        self.datatypes.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// Run the tallier over every datatype of a platform and union the label and
/// component keys seen across them.
pub fn analyze_platform(data: &[(String, Vec<Record>)], platform: &str) -> PlatformReport {
    tracing::info!(platform, "narrative analysis");

    let mut datatypes = Vec::with_capacity(data.len());
    let mut labels = BTreeSet::new();
    let mut components = BTreeSet::new();

    for (datatype, records) in data {
        let tally = tally_records(records, datatype);
        labels.extend(tally.label_freq.keys().cloned());
        components.extend(tally.comp_freq.keys().cloned());
        datatypes.push((datatype.clone(), tally));
    }

    tracing::info!(
        platform,
        unique_labels = labels.len(),
        unique_components = components.len(),
        "platform totals"
    );
    PlatformReport { platform: platform.to_string(), datatypes, labels, components }
}

/// Union label/component vocabularies across platform reports; the result
/// drives the row sets of the exported CSVs.
pub fn union_vocab<'a>(
    reports: impl IntoIterator<Item = &'a PlatformReport>,
) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut labels = BTreeSet::new();
    let mut components = BTreeSet::new();
    for report in reports {
        labels.extend(report.labels.iter().cloned());
        components.extend(report.components.iter().cloned());
    }
    (labels, components)
}
