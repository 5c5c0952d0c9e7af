//! Per-file analysis and aggregation
//!
//! Reads one file at a time, computes its metrics, and folds the results
//! into a `DirectoryReport`. A file that fails analysis never aborts the
//! scan; it is recorded as skipped and the fold moves on.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::model::{DirectoryReport, FileMetrics, SkipReason};
use crate::core::paths::make_relative;
use crate::core::tokenizer::TokenCounter;

/// Compute metrics for one file.
///
/// Unreadable or non-UTF-8 content yields a `SkipReason` instead of
/// metrics. A genuinely empty file is a success with all-zero metrics.
pub fn analyze_file(path: &Path, counter: &TokenCounter) -> Result<FileMetrics, SkipReason> {
    let raw = fs::read(path)?;
    let bytes = raw.len() as u64;
    let content = String::from_utf8(raw).map_err(|_| SkipReason::NotUtf8)?;

    Ok(FileMetrics {
        tokens: counter.count(&content),
        chars: content.chars().count(),
        lines: count_lines(&content),
        bytes,
    })
}

/// Newline count, plus one when the last line is non-empty but unterminated
fn count_lines(content: &str) -> usize {
    let newlines = content.bytes().filter(|&b| b == b'\n').count();
    if !content.is_empty() && !content.ends_with('\n') {
        newlines + 1
    } else {
        newlines
    }
}

/// Analyze every candidate in order, folding the results into one report.
pub fn analyze_files(root: &Path, files: &[PathBuf], counter: &TokenCounter) -> DirectoryReport {
    let mut report = DirectoryReport::default();

    for path in files {
        match analyze_file(path, counter) {
            Ok(metrics) => {
                let display =
                    make_relative(path, root).unwrap_or_else(|| path.display().to_string());
                report.push(display, metrics);
            }
            Err(_) => report.record_skip(),
        }
    }

    report
}
