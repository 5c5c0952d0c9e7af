//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Report data model (metrics, totals, error taxonomy)
//! - Text file classification heuristics
//! - Token counting for LLM context estimation
//! - Path normalization utilities
//! - Common formatting helpers

pub mod classify;
pub mod model;
pub mod paths;
pub mod tokenizer;
pub mod util;
