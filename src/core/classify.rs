//! Text file classification
//!
//! Decides whether a filesystem entry should be analyzed as text. Three
//! checks run in order: known extension, known extensionless name, then a
//! bounded content sniff for everything else.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes sampled from the head of a file for the content sniff
const SNIFF_BYTES: usize = 1024;

/// Extensions (lowercase, without the dot) accepted without reading content
static TEXT_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "txt", "md", "py", "js", "ts", "jsx", "tsx", "html", "css", "scss", "json", "yaml", "yml",
        "xml", "csv", "sql", "sh", "bash", "zsh", "fish", "vim", "lua", "r", "rb", "go", "rs",
        "cpp", "c", "h", "hpp", "java", "kt", "swift", "php", "pl", "ps1", "bat", "dockerfile",
        "gitignore", "gitattributes", "env", "ini", "cfg", "conf", "toml", "lock", "log", "rst",
        "tex", "bib", "makefile", "cmake",
    ]
    .into_iter()
    .collect()
});

/// Extensionless file names (compared case-insensitively) accepted as text
const TEXT_FILENAMES: &[&str] = &["readme", "license", "changelog", "makefile", "dockerfile"];

/// Decide whether `path` should be analyzed as text.
///
/// Never fails: a file that cannot be opened or read classifies as non-text.
pub fn is_text_file(path: &Path) -> bool {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if TEXT_EXTENSIONS.contains(ext.to_ascii_lowercase().as_str()) {
            return true;
        }
    }

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if TEXT_FILENAMES.contains(&name.to_ascii_lowercase().as_str()) {
            return true;
        }
    }

    sniff_is_text(path)
}

/// Sample the first `SNIFF_BYTES` bytes and look for binary markers.
fn sniff_is_text(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut sample = Vec::with_capacity(SNIFF_BYTES);
    if file.take(SNIFF_BYTES as u64).read_to_end(&mut sample).is_err() {
        return false;
    }

    // Empty files are text
    if sample.is_empty() {
        return true;
    }

    if sample.contains(&0) {
        return false;
    }

    std::str::from_utf8(&sample).is_ok()
}
