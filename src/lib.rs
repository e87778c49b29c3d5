mod config;
mod gzip_json;
mod progress;
mod record;
mod util;

mod export;
mod keywords;
mod platform;
mod tally;

mod pipeline;

pub use crate::config::{AnalysisOptions, PlatformFiles};
pub use crate::pipeline::{NarrativeEtl, PlatformData};
pub use crate::record::{components, Extension, Record};

pub use crate::platform::{analyze_platform, union_vocab, PlatformReport};
pub use crate::tally::{tally_records, DatatypeTally};

// Expose the keyword-inference path (exploratory; unused by the main flow).
pub use crate::keywords::{compare_labels, infer_components, KeywordMap, LabelComparison};

// Expose the raw loader and progress helper for application code.
pub use crate::gzip_json::load_json_objects;
pub use crate::progress::make_progress_bar_labeled;

// Expose tracing init so binaries can set up logging at startup.
pub use crate::util::init_tracing_once;
