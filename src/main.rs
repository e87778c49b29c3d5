use anyhow::Result;
use narrfreq::{init_tracing_once, union_vocab, NarrativeEtl, PlatformFiles};
use std::path::PathBuf;

const DATA_ROOT: &str = "./data";
const RESULTS_ROOT: &str = "./results";

fn main() -> Result<()> {
    init_tracing_once();
    let data_root = PathBuf::from(DATA_ROOT);

    let etl = NarrativeEtl::new()
        .results_dir(RESULTS_ROOT)
        .progress(true);

    let youtube = etl
        .clone()
        .progress_label("Loading YouTube data")
        .run_platform(&PlatformFiles::youtube(&data_root))?;

    let twitter = etl
        .clone()
        .progress_label("Loading Twitter data")
        .run_platform(&PlatformFiles::twitter(&data_root))?;

    let (labels, components) = union_vocab([&youtube, &twitter]);
    tracing::info!(
        unique_labels = labels.len(),
        unique_components = components.len(),
        "cross-platform vocabulary"
    );

    etl.export_frequency_csvs(&youtube, &labels, &components)?;
    etl.export_frequency_csvs(&twitter, &labels, &components)?;

    Ok(())
}
