use crate::config::{AnalysisOptions, PlatformFiles};
use crate::export::write_frequency_csvs;
use crate::gzip_json::{load_json_objects, load_json_objects_with_progress_cfg};
use crate::platform::{analyze_platform, PlatformReport};
use crate::progress::{make_progress_bar_labeled, total_compressed_size};
use crate::record::Record;
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Loaded records for one platform, keyed by datatype in configured order.
pub type PlatformData = Vec<(String, Vec<Record>)>;

/// Entry point for narrative frequency analysis.
/// Everything runs synchronously on the calling thread: load a platform's
/// file table, tally per datatype, then export frequency CSVs.
#[derive(Clone)]
pub struct NarrativeEtl {
    pub(crate) opts: AnalysisOptions,
}

impl NarrativeEtl {
    pub fn new() -> Self {
        Self { opts: AnalysisOptions::default() }
    }

    // -------- Builder methods --------
    pub fn results_dir(mut self, dir: impl AsRef<std::path::Path>) -> Self { self.opts = self.opts.with_results_dir(dir); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }
    pub fn io_read_buffer(mut self, bytes: usize) -> Self { self.opts = self.opts.with_io_read_buffer(bytes); self }
    pub fn io_write_buffer(mut self, bytes: usize) -> Self { self.opts = self.opts.with_io_write_buffer(bytes); self }
    pub fn io_buffers(mut self, read_bytes: usize, write_bytes: usize) -> Self { self.opts = self.opts.with_io_buffers(read_bytes, write_bytes); self }

    // -------- Operations --------

    /// Load every datatype of a platform's file table. A missing file or a
    /// malformed payload propagates and ends the run.
    pub fn load_platform(&self, files: &PlatformFiles) -> Result<PlatformData> {
        init_tracing_once();
        let read_buf = self.opts.read_buffer_bytes;

        let total_bytes = total_compressed_size(files.files.iter().map(|(_, p)| p));
        let pb = if self.opts.progress {
            Some(make_progress_bar_labeled(total_bytes, self.opts.progress_label.as_deref()))
        } else {
            None
        };

        let mut data = Vec::with_capacity(files.files.len());
        for (datatype, path) in &files.files {
            tracing::info!(datatype = datatype.as_str(), path = %path.display(), "loading");

            let values = if let Some(pb) = &pb {
                load_json_objects_with_progress_cfg(path, read_buf, |delta| pb.inc(delta))
            } else {
                load_json_objects(path, read_buf)
            }
            .with_context(|| format!("loading {datatype} from {}", path.display()))?;

            let mut records = Vec::with_capacity(values.len());
            for value in values {
                let record: Record = serde_json::from_value(value)
                    .with_context(|| format!("malformed {datatype} record in {}", path.display()))?;
                records.push(record);
            }

            tracing::info!(datatype = datatype.as_str(), objects = records.len(), "loaded");
            data.push((datatype.clone(), records));
        }

        if let Some(pb) = pb { pb.finish_with_message("load done"); }
        Ok(data)
    }

    /// Tally every datatype and union the platform-wide vocabularies.
    pub fn analyze_platform(&self, data: &PlatformData, platform: &str) -> PlatformReport {
        init_tracing_once();
        analyze_platform(data, platform)
    }

    /// Load + analyze in one step.
    pub fn run_platform(&self, files: &PlatformFiles) -> Result<PlatformReport> {
        let data = self.load_platform(files)?;
        Ok(self.analyze_platform(&data, &files.platform))
    }

    /// Export `<platform>_freq_narrative_labels.csv` and
    /// `..._narrative_components.csv` into the configured results directory.
    /// Row sets come from the cross-platform unions, with 0 filled in where a
    /// datatype never saw a key.
    pub fn export_frequency_csvs(
        &self,
        report: &PlatformReport,
        union_labels: &BTreeSet<String>,
        union_components: &BTreeSet<String>,
    ) -> Result<(PathBuf, PathBuf)> {
        init_tracing_once();
        let stem = format!("{}_freq", report.platform);
        write_frequency_csvs(
            report,
            union_labels,
            union_components,
            &self.opts.results_dir,
            &stem,
            self.opts.write_buffer_bytes,
        )
    }
}

impl Default for NarrativeEtl {
    fn default() -> Self {
        Self::new()
    }
}
