//! Report data model
//!
//! Every scan produces these types before rendering: per-file metrics, the
//! running totals, and the error taxonomy shown to the user.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Metrics computed for a single analyzed file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileMetrics {
    /// Subword tokens produced by the tokenizer
    pub tokens: usize,

    /// Unicode scalar values in the decoded content (not bytes)
    pub chars: usize,

    /// Newline count, plus one for a non-empty final line without a newline
    pub lines: usize,

    /// File size on disk in bytes
    pub bytes: u64,
}

impl FileMetrics {
    /// Tokens-per-character ratio; 0.0 when there is no content
    pub fn tokens_per_char(&self) -> f64 {
        if self.chars == 0 {
            0.0
        } else {
            self.tokens as f64 / self.chars as f64
        }
    }
}

/// A successfully analyzed file with its root-relative display path
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path relative to the scan root, using '/' as separator
    pub path: String,

    #[serde(flatten)]
    pub metrics: FileMetrics,
}

/// Running sums over every analyzed file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanTotals {
    pub tokens: usize,
    pub chars: usize,
    pub lines: usize,
    pub bytes: u64,

    /// Number of files folded into the sums
    pub files: usize,
}

impl ScanTotals {
    fn add(&mut self, metrics: &FileMetrics) {
        self.tokens += metrics.tokens;
        self.chars += metrics.chars;
        self.lines += metrics.lines;
        self.bytes += metrics.bytes;
        self.files += 1;
    }

    /// View the totals as a single metrics record for rendering
    pub fn as_metrics(&self) -> FileMetrics {
        FileMetrics {
            tokens: self.tokens,
            chars: self.chars,
            lines: self.lines,
            bytes: self.bytes,
        }
    }
}

/// Aggregated result of a directory scan
///
/// `push` is the only way entries get in, so `totals` always equals the
/// exact sum of the per-file metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DirectoryReport {
    pub files: Vec<FileReport>,
    pub totals: ScanTotals,

    /// Candidates whose analysis failed (unreadable or not UTF-8)
    pub skipped: usize,
}

impl DirectoryReport {
    pub fn push(&mut self, path: String, metrics: FileMetrics) {
        self.totals.add(&metrics);
        self.files.push(FileReport { path, metrics });
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Why a candidate file was left out of the aggregate
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("cannot read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("content is not valid UTF-8")]
    NotUtf8,
}

/// Fatal errors reported to the user; each one terminates the run with exit code 1
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Error: Path '{}' not found", .0.display())]
    PathNotFound(PathBuf),

    #[error("Error: '{}' is not a file or directory", .0.display())]
    UnsupportedPath(PathBuf),

    #[error("Error: '{}' does not appear to be a text file", .0.display())]
    NotText(PathBuf),

    #[error("Error: Cannot read '{}' as UTF-8 text", .0.display())]
    DecodeFailure(PathBuf),

    #[error("No text files found in '{}'", .0.display())]
    NoTextFiles(PathBuf),

    #[error("No readable text files found in '{}'", .0.display())]
    NoReadableFiles(PathBuf),
}
