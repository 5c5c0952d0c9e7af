//! quicktoken - Count LLM tokens in files and directory trees
//!
//! quicktoken provides:
//! - Token counting with tiktoken encodings (gpt-4o by default)
//! - Text file detection by extension, name and content sniffing
//! - Recursive directory scans with per-file and aggregate reports
//! - Colored terminal output or JSON

use clap::Parser;

mod cli;
mod core;
mod report;
mod scan;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli::run(cli) {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
}
