//! Filesystem traversal
//!
//! Walks a directory tree, prunes well-known noise directories, and returns
//! the sorted list of regular files that classify as text.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::classify::is_text_file;

/// Path segments pruned wherever they appear. A matching directory is
/// skipped with its whole subtree; a matching file is skipped on its own.
const EXCLUDED_SEGMENTS: &[&str] = &[
    ".git",
    ".venv",
    "venv",
    "__pycache__",
    ".pytest_cache",
    "node_modules",
    ".next",
    "dist",
    "build",
    ".cache",
    ".DS_Store",
    ".idea",
    ".vscode",
    "target",
];

fn is_excluded(name: &OsStr) -> bool {
    name.to_str()
        .map(|n| EXCLUDED_SEGMENTS.contains(&n))
        .unwrap_or(false)
}

/// Collect every text file under `root`, sorted by path.
///
/// Unreadable directory entries are skipped silently. Symlinks are not
/// followed, so link cycles cannot trap the walk.
pub fn find_text_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry.file_name()));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if is_text_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_finds_text_files_recursively() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("a.txt"), "a");
        touch(&temp.path().join("sub/deep/b.md"), "b");

        let files = find_text_files(temp.path());
        assert_eq!(
            files,
            vec![temp.path().join("a.txt"), temp.path().join("sub/deep/b.md")]
        );
    }

    #[test]
    fn test_results_are_sorted() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("c.txt"), "c");
        touch(&temp.path().join("a.txt"), "a");
        touch(&temp.path().join("b/d.md"), "d");

        let files = find_text_files(temp.path());
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
        assert_eq!(files[0], temp.path().join("a.txt"));
    }

    #[test]
    fn test_excluded_directories_are_pruned() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("src/main.rs"), "fn main() {}");
        touch(&temp.path().join("node_modules/pkg/index.js"), "x");
        touch(&temp.path().join("sub/.git/HEAD"), "ref: refs/heads/main");
        touch(&temp.path().join("target/debug/build.rs"), "x");

        let files = find_text_files(temp.path());
        assert_eq!(files, vec![temp.path().join("src/main.rs")]);
    }

    #[test]
    fn test_files_named_like_excluded_directories_are_skipped() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("build"), "#!/bin/sh\nmake\n");
        touch(&temp.path().join("notes.txt"), "notes");

        let files = find_text_files(temp.path());
        assert_eq!(files, vec![temp.path().join("notes.txt")]);
    }

    #[test]
    fn test_unlisted_hidden_directories_are_scanned() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join(".config/settings.toml"), "[core]\n");

        let files = find_text_files(temp.path());
        assert_eq!(files, vec![temp.path().join(".config/settings.toml")]);
    }

    #[test]
    fn test_binary_files_are_filtered_out() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("keep.txt"), "text");
        fs::write(temp.path().join("drop.bin"), b"\x00\x01\x02").unwrap();

        let files = find_text_files(temp.path());
        assert_eq!(files, vec![temp.path().join("keep.txt")]);
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let temp = tempdir().unwrap();
        assert!(find_text_files(temp.path()).is_empty());
    }

    #[test]
    fn test_root_named_like_excluded_directory_yields_nothing() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("venv");
        touch(&root.join("lib.py"), "x = 1\n");

        assert!(find_text_files(&root).is_empty());
    }
}
