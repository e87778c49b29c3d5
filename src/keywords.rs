//! Keyword-based narrative inference (exploratory; not on the main path).
//! Matches configured free-text fields against a search-term -> component
//! mapping and compares the result to the given annotation.

use crate::record::{components, Record};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Ordered search-term -> narrative-component mapping.
/// Terms are stored lowercased; first match per term wins, no ranking.
#[derive(Debug, Clone, Default)]
pub struct KeywordMap {
    entries: Vec<(String, String)>,
}

impl KeywordMap {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        Self { entries }
    }

    /// Load from a two-column CSV (`search_term,narrative_component`, with a
    /// header row).
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));
        let mut entries = Vec::new();
        for row in reader.records() {
            let row = row.with_context(|| format!("read keyword CSV {}", path.display()))?;
            let term = row.get(0).unwrap_or("").trim().to_lowercase();
            let component = row.get(1).unwrap_or("").trim().to_string();
            if !term.is_empty() && !component.is_empty() {
                entries.push((term, component));
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Components whose search term occurs as a substring of `text`
    /// (`text` must already be lowercased). Deduped, match order preserved.
    pub fn infer(&self, text: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for (term, component) in &self.entries {
            if text.contains(term.as_str()) && !out.iter().any(|c| c == component) {
                out.push(component.clone());
            }
        }
        out
    }
}

/// Infer narrative components for one record by scanning the configured text
/// fields. List-valued fields are joined with spaces before matching.
pub fn infer_components(record: &Record, text_fields: &[&str], map: &KeywordMap) -> Vec<String> {
    let mut text = String::new();
    for field in text_fields {
        if let Some(t) = record.text_field_lower(field) {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&t);
        }
    }
    map.infer(&text)
}

/// Given vs. inferred components for one record.
#[derive(Debug, Clone, Default)]
pub struct LabelComparison {
    pub given: BTreeSet<String>,
    pub inferred: BTreeSet<String>,
}

impl LabelComparison {
    pub fn matched(&self) -> BTreeSet<String> {
        self.given.intersection(&self.inferred).cloned().collect()
    }
    pub fn given_only(&self) -> BTreeSet<String> {
        self.given.difference(&self.inferred).cloned().collect()
    }
    pub fn inferred_only(&self) -> BTreeSet<String> {
        self.inferred.difference(&self.given).cloned().collect()
    }
}

/// Compare a record's given labels (split into components, empty sentinel
/// dropped) against keyword-inferred components.
pub fn compare_labels(record: &Record, text_fields: &[&str], map: &KeywordMap) -> LabelComparison {
    let mut given = BTreeSet::new();
    if let Some(labels) = record.labels() {
        for label in labels {
            for comp in components(label) {
                if !comp.is_empty() {
                    given.insert(comp.to_string());
                }
            }
        }
    }
    let inferred = infer_components(record, text_fields, map).into_iter().collect();
    LabelComparison { given, inferred }
}
