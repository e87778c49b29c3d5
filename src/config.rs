use std::path::{Path, PathBuf};

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    pub results_dir: PathBuf,             // where frequency CSVs land
    pub progress: bool,                   // show progress bar
    pub progress_label: Option<String>,   // optional label for progress bar

    // IO tuning
    pub read_buffer_bytes: usize,         // BufReader capacity
    pub write_buffer_bytes: usize,        // BufWriter capacity
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        // Defaults chosen to be safe but noticeably faster than std defaults.
        let default_read = 256 * 1024;
        let default_write = 256 * 1024;

        Self {
            results_dir: PathBuf::from("./results"),
            progress: true,
            progress_label: None,

            read_buffer_bytes: default_read,
            write_buffer_bytes: default_write,
        }
    }
}

impl AnalysisOptions {
    pub fn with_results_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.results_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }

    // IO buffers tuning
    pub fn with_io_read_buffer(mut self, bytes: usize) -> Self {
        self.read_buffer_bytes = bytes.max(8 * 1024);
        self
    }
    pub fn with_io_write_buffer(mut self, bytes: usize) -> Self {
        self.write_buffer_bytes = bytes.max(8 * 1024);
        self
    }
    pub fn with_io_buffers(mut self, read_bytes: usize, write_bytes: usize) -> Self {
        self.read_buffer_bytes = read_bytes.max(8 * 1024);
        self.write_buffer_bytes = write_bytes.max(8 * 1024);
        self
    }
}

/// Explicit datatype -> file table for one platform.
/// Order is preserved: it decides tally order and CSV column order.
#[derive(Clone, Debug)]
pub struct PlatformFiles {
    pub platform: String,
    pub files: Vec<(String, PathBuf)>,
}

impl PlatformFiles {
    pub fn new(platform: impl Into<String>) -> Self {
        Self { platform: platform.into(), files: Vec::new() }
    }

    /// Append one datatype -> path entry (chainable).
    pub fn datatype(mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        self.files.push((name.into(), path.as_ref().to_path_buf()));
        self
    }

    /// The YouTube dump layout: five datatypes under `<data_root>/YouTube/`.
    pub fn youtube(data_root: impl AsRef<Path>) -> Self {
        let base = data_root.as_ref().join("YouTube");
        Self::new("youtube")
            .datatype("captions", base.join("Tng_an_Captions.json.gz"))
            .datatype("channels", base.join("Tng_an_Channels.json.gz"))
            .datatype("comments", base.join("Tng_an_Comments.json.gz"))
            .datatype("comment_replies", base.join("Tng_an_CommentReplies.json.gz"))
            .datatype("videos", base.join("Tng_an_Videos.json.gz"))
    }

    /// The Twitter dump layout: tweets, the retweet chain, and both botometer
    /// result sets under `<data_root>/Twitter/`.
    pub fn twitter(data_root: impl AsRef<Path>) -> Self {
        let base = data_root.as_ref().join("Twitter");
        Self::new("twitter")
            .datatype("tweets", base.join("Tng_an_WH_Twitter_v2.json.gz"))
            .datatype("retweet_chain", base.join("Tng_an_Retweet_Chain_WH.json.gz"))
            .datatype("botometer_en", base.join("Tng_an_en_Twitter_WH_botometer_results.json.gz"))
            .datatype("botometer_ar", base.join("Tng_an_ar_Twitter_WH_botometer_results.json.gz"))
    }

    /// Datatype names in configured order (CSV column order).
    pub fn datatype_names(&self) -> Vec<&str> {
        self.files.iter().map(|(name, _)| name.as_str()).collect()
    }
}
