use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Load a gzip-compressed JSON collection into a vector of values.
/// The decompressed payload is either JSONL (one object per line) or a single
/// top-level JSON array; both shapes occur in the SocialSim dumps.
///
/// Malformed compression or JSON propagates as an error: the corpus tables are
/// small and fixed, so a bad file should stop the run rather than be skipped.
pub fn load_json_objects(path: &Path, read_buf_bytes: usize) -> Result<Vec<serde_json::Value>> {
    load_attempt(path, read_buf_bytes, &mut |_| {})
}

/// Same as `load_json_objects` but calls `on_progress(delta_bytes_read)` with
/// compressed-byte deltas as the stream advances, for byte-based progress bars.
pub fn load_json_objects_with_progress_cfg(
    path: &Path,
    read_buf_bytes: usize,
    mut on_progress: impl FnMut(u64),
) -> Result<Vec<serde_json::Value>> {
    load_attempt(path, read_buf_bytes, &mut on_progress)
}

fn load_attempt(
    path: &Path,
    read_buf_bytes: usize,
    on_progress: &mut impl FnMut(u64),
) -> Result<Vec<serde_json::Value>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let counter = Arc::new(AtomicU64::new(0));
    let cnt = CountingReader { inner: file, counter: counter.clone() };

    let decoder = MultiGzDecoder::new(cnt);
    let cap = read_buf_bytes.max(16 * 1024);
    let mut reader = BufReader::with_capacity(cap, decoder);

    let mut objects = Vec::new();
    let mut array_text: Option<String> = None;
    let mut seen_content = false;

    let mut buf = String::with_capacity(16 * 1024);
    let mut line_no = 0u64;
    let mut last = 0u64;
    loop {
        buf.clear();
        let n = reader
            .read_line(&mut buf)
            .with_context(|| format!("decompress {}", path.display()))?;
        if n == 0 {
            // final progress flush
            let cur = counter.load(Ordering::Relaxed);
            if cur > last {
                on_progress(cur - last);
            }
            break;
        }
        line_no += 1;
        if buf.ends_with('\n') {
            let _ = buf.pop();
            if buf.ends_with('\r') { let _ = buf.pop(); }
        }

        let cur = counter.load(Ordering::Relaxed);
        if cur > last {
            on_progress(cur - last);
            last = cur;
        }

        if let Some(text) = array_text.as_mut() {
            text.push_str(&buf);
            text.push('\n');
            continue;
        }
        let trimmed = buf.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        if !seen_content {
            seen_content = true;
            if trimmed.starts_with('[') {
                // JSON-array payload: accumulate the whole stream, parse once at EOF.
                let mut text = String::with_capacity(cap);
                text.push_str(&buf);
                text.push('\n');
                array_text = Some(text);
                continue;
            }
        }
        let value: serde_json::Value = serde_json::from_str(&buf)
            .with_context(|| format!("parse JSON on line {} of {}", line_no, path.display()))?;
        objects.push(value);
    }

    if let Some(text) = array_text {
        objects = serde_json::from_str(&text)
            .with_context(|| format!("parse JSON array in {}", path.display()))?;
    }
    Ok(objects)
}

/// A `Read` wrapper that counts compressed bytes read.
struct CountingReader<R: Read> {
    inner: R,
    counter: Arc<AtomicU64>,
}
impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.counter.fetch_add(n as u64, Ordering::Relaxed);
        Ok(n)
    }
}
