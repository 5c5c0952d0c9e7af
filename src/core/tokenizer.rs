//! Token counting module - tokenizer selection for LLM context estimation
//!
//! Resolves a model name to its tiktoken encoding and counts tokens with it.
//! Model names are the ones tiktoken knows (gpt-4o, gpt-4, gpt-3.5-turbo,
//! text-embedding-3-small, ...); anything unrecognized falls back to the
//! cl100k_base encoding so a count is always produced.
//!
//! Usage:
//! ```rust,ignore
//! let counter = TokenCounter::for_model("gpt-4o")?;
//! let tokens = counter.count("Hello world");
//! ```

use anyhow::{Context, Result};
use tiktoken_rs::{cl100k_base, get_bpe_from_model, CoreBPE};

/// Model used when the user does not pass `--model`
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// A resolved tokenizer for one model, reused across every file in a run
pub struct TokenCounter {
    bpe: CoreBPE,
}

impl TokenCounter {
    /// Resolve `model` to its encoding, falling back to cl100k_base for
    /// model names tiktoken has no mapping for.
    pub fn for_model(model: &str) -> Result<Self> {
        let bpe = match get_bpe_from_model(model) {
            Ok(bpe) => bpe,
            Err(_) => cl100k_base().context("failed to load the cl100k_base fallback encoding")?,
        };
        Ok(Self { bpe })
    }

    /// Count tokens in `text`.
    ///
    /// Substrings that look like special tokens (e.g. `<|endoftext|>`) are
    /// encoded as ordinary text, never rejected.
    pub fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.bpe.encode_ordinary(text).len()
    }
}
