//! CLI module - Command-line interface definition and run logic

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::core::classify;
use crate::core::model::ScanError;
use crate::core::tokenizer::{TokenCounter, DEFAULT_MODEL};
use crate::report;
use crate::scan::{analyze, walk};

/// quicktoken - count LLM tokens in files and directory trees.
#[derive(Parser, Debug)]
#[command(name = "quicktoken")]
#[command(
    author,
    version,
    about,
    long_about = r#"quicktoken counts LLM tokens in a file or a whole directory tree.

Given a file, it prints a block with the token, character and line counts,
the file size, and the tokens-per-character ratio. Given a directory, it
walks the tree (skipping version-control metadata, build output, caches and
dependency directories), analyzes every text file, and prints per-file token
counts followed by the aggregate block.

Text files are detected by extension, by well-known extensionless names
(README, LICENSE, ...), and by a content sniff for everything else. In
directory mode, files that cannot be read as UTF-8 are skipped.

Examples:
    quicktoken README.md
    quicktoken src
    quicktoken . --model gpt-4
    quicktoken docs --json
"#
)]
pub struct Cli {
    /// File or directory to analyze.
    #[arg(
        value_name = "PATH",
        long_help = "File or directory to analyze.\n\n\
A file is analyzed on its own. A directory is walked recursively and every\n\
discovered text file contributes to the aggregate report."
    )]
    pub path: PathBuf,

    /// Tokenizer model used to select the encoding.
    #[arg(
        long,
        default_value = DEFAULT_MODEL,
        env = "QUICKTOKEN_MODEL",
        value_name = "MODEL",
        long_help = "Tokenizer model used to select the encoding (e.g. gpt-4o, gpt-4,\n\
gpt-3.5-turbo). Model names tiktoken has no mapping for fall back to the\n\
cl100k_base encoding instead of failing, so a count is always produced."
    )]
    pub model: String,

    /// Print the report as JSON instead of the colored summary.
    #[arg(
        long,
        long_help = "Print the report as pretty JSON instead of the colored summary.\n\n\
For a directory this includes one entry per analyzed file plus the totals\n\
and the number of skipped (unreadable) candidates."
    )]
    pub json: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    if !cli.path.exists() {
        return Err(ScanError::PathNotFound(cli.path).into());
    }

    // One tokenizer per run; every file is counted with the same encoding
    let counter = TokenCounter::for_model(&cli.model)?;

    if cli.path.is_file() {
        run_file(&cli.path, &counter, &cli.model, cli.json)
    } else if cli.path.is_dir() {
        run_directory(&cli.path, &counter, &cli.model, cli.json)
    } else {
        Err(ScanError::UnsupportedPath(cli.path).into())
    }
}

fn run_file(path: &Path, counter: &TokenCounter, model: &str, json: bool) -> Result<()> {
    if !classify::is_text_file(path) {
        return Err(ScanError::NotText(path.to_path_buf()).into());
    }

    let metrics = analyze::analyze_file(path, counter)
        .map_err(|_| ScanError::DecodeFailure(path.to_path_buf()))?;

    if json {
        println!("{}", report::file_json(path, model, &metrics)?);
    } else {
        print!("{}", report::file_block(path, &metrics, model));
    }

    Ok(())
}

fn run_directory(dir: &Path, counter: &TokenCounter, model: &str, json: bool) -> Result<()> {
    let files = walk::find_text_files(dir);
    if files.is_empty() {
        return Err(ScanError::NoTextFiles(dir.to_path_buf()).into());
    }

    if !json {
        print!("{}", report::analyzing_header(files.len(), dir));
    }

    let dir_report = analyze::analyze_files(dir, &files, counter);
    if dir_report.is_empty() {
        return Err(ScanError::NoReadableFiles(dir.to_path_buf()).into());
    }

    if json {
        println!("{}", report::directory_json(dir, model, &dir_report)?);
    } else {
        for file in &dir_report.files {
            println!("{}", report::file_line(&file.path, file.metrics.tokens));
        }
        print!("{}", report::directory_block(dir, &dir_report.totals, model));
    }

    Ok(())
}
