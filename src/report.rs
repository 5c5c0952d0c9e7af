//! Report rendering
//!
//! Renders the colored terminal blocks and the JSON report shapes. Every
//! function returns a `String`; the CLI layer decides where it goes.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::core::model::{DirectoryReport, FileMetrics, FileReport, ScanTotals};
use crate::core::util::{format_file_size, format_number};

/// Width of the rule printed under each block title
const RULE_WIDTH: usize = 50;

/// Final path component used as a block title. `.` and `/` have no final
/// component and fall back to the path itself.
fn path_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Header printed before the per-file lines in directory mode
pub fn analyzing_header(count: usize, dir: &Path) -> String {
    format!(
        "\n📁 Analyzing {} files in {}\n\n",
        count,
        format!("{}/", path_label(dir)).bold()
    )
}

/// One line per analyzed file in directory mode
pub fn file_line(path: &str, tokens: usize) -> String {
    format!("  {}: {} tokens", path, format_number(tokens).bold().green())
}

/// Detailed block for a single analyzed file
pub fn file_block(path: &Path, metrics: &FileMetrics, model: &str) -> String {
    let title = format!("📄 {}", path_label(path).bold());
    stat_block(title, "File size:   ", metrics, model)
}

/// Aggregate block closing a directory scan
pub fn directory_block(dir: &Path, totals: &ScanTotals, model: &str) -> String {
    let title = format!(
        "📁 {}",
        format!("{}/ ({} files)", path_label(dir), totals.files).bold()
    );
    stat_block(title, "Total size:  ", &totals.as_metrics(), model)
}

fn stat_block(title: String, size_label: &str, metrics: &FileMetrics, model: &str) -> String {
    let ratio = format!("{:.3} tokens/char", metrics.tokens_per_char());

    let mut out = String::new();
    out.push_str(&format!("\n{title}\n"));
    out.push_str(&format!("{}\n", "─".repeat(RULE_WIDTH)));
    out.push_str(&format!(
        "🔢 Tokens:      {}\n",
        format_number(metrics.tokens).bold().green()
    ));
    out.push_str(&format!(
        "📝 Characters:  {}\n",
        format_number(metrics.chars).cyan()
    ));
    out.push_str(&format!(
        "📏 Lines:       {}\n",
        format_number(metrics.lines).cyan()
    ));
    out.push_str(&format!(
        "💾 {size_label}{}\n",
        format_file_size(metrics.bytes).cyan()
    ));
    out.push_str(&format!("⚖️  Ratio:       {}\n", ratio.yellow()));
    out.push_str(&format!("🤖 Model:       {}\n", model.magenta()));
    out.push('\n');
    out
}

#[derive(Serialize)]
struct FileJson<'a> {
    path: String,
    model: &'a str,
    #[serde(flatten)]
    metrics: FileMetrics,
}

/// JSON report for a single file
pub fn file_json(path: &Path, model: &str, metrics: &FileMetrics) -> Result<String> {
    let doc = FileJson {
        path: path.display().to_string(),
        model,
        metrics: *metrics,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

#[derive(Serialize)]
struct DirectoryJson<'a> {
    path: String,
    model: &'a str,
    files: &'a [FileReport],
    totals: ScanTotals,
    skipped: usize,
}

/// JSON report for a directory scan
pub fn directory_json(dir: &Path, model: &str, report: &DirectoryReport) -> Result<String> {
    let doc = DirectoryJson {
        path: dir.display().to_string(),
        model,
        files: &report.files,
        totals: report.totals,
        skipped: report.skipped,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(tokens: usize, chars: usize, lines: usize, bytes: u64) -> FileMetrics {
        FileMetrics {
            tokens,
            chars,
            lines,
            bytes,
        }
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_path_label_variants() {
        assert_eq!(path_label(Path::new("a/b.txt")), "b.txt");
        assert_eq!(path_label(Path::new("src")), "src");
        assert_eq!(path_label(Path::new(".")), ".");
        assert_eq!(path_label(Path::new("/")), "/");
    }

    #[test]
    fn test_file_block_layout() {
        plain();
        let block = file_block(Path::new("dir/notes.txt"), &metrics(2, 10, 1, 10), "gpt-4o");

        assert!(block.starts_with("\n📄 notes.txt\n"));
        assert!(block.contains(&"─".repeat(50)));
        assert!(block.contains("🔢 Tokens:      2\n"));
        assert!(block.contains("📝 Characters:  10\n"));
        assert!(block.contains("📏 Lines:       1\n"));
        assert!(block.contains("💾 File size:   10.0 B\n"));
        assert!(block.contains("⚖️  Ratio:       0.200 tokens/char\n"));
        assert!(block.contains("🤖 Model:       gpt-4o\n"));
        assert!(block.ends_with("\n\n"));
    }

    #[test]
    fn test_directory_block_title_and_size_label() {
        plain();
        let mut report = DirectoryReport::default();
        report.push("a.txt".to_string(), metrics(3, 12, 1, 12));
        report.push("b.txt".to_string(), metrics(1, 4, 1, 4));

        let block = directory_block(Path::new("proj"), &report.totals, "gpt-4o");
        assert!(block.contains("📁 proj/ (2 files)"));
        assert!(block.contains("💾 Total size:  16.0 B\n"));
        assert!(block.contains("🔢 Tokens:      4\n"));
    }

    #[test]
    fn test_file_line_formats_token_count() {
        plain();
        assert_eq!(file_line("src/a.rs", 1234), "  src/a.rs: 1,234 tokens");
    }

    #[test]
    fn test_analyzing_header() {
        plain();
        let header = analyzing_header(3, Path::new("work/src"));
        assert_eq!(header, "\n📁 Analyzing 3 files in src/\n\n");
    }

    #[test]
    fn test_file_json_shape() {
        let json = file_json(Path::new("a.txt"), "gpt-4o", &metrics(2, 10, 1, 10)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["path"], "a.txt");
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["tokens"], 2);
        assert_eq!(value["chars"], 10);
        assert_eq!(value["lines"], 1);
        assert_eq!(value["bytes"], 10);
    }

    #[test]
    fn test_directory_json_shape() {
        let mut report = DirectoryReport::default();
        report.push("a.txt".to_string(), metrics(3, 12, 1, 12));
        report.record_skip();

        let json = directory_json(Path::new("proj"), "gpt-4o", &report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["path"], "proj");
        assert_eq!(value["files"].as_array().unwrap().len(), 1);
        assert_eq!(value["files"][0]["path"], "a.txt");
        assert_eq!(value["files"][0]["tokens"], 3);
        assert_eq!(value["totals"]["tokens"], 3);
        assert_eq!(value["totals"]["files"], 1);
        assert_eq!(value["skipped"], 1);
    }
}
