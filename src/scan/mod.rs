//! Scan module - Directory traversal and per-file analysis
//!
//! This module provides:
//! - Recursive text file discovery with a fixed exclusion list
//! - Per-file metric computation and aggregation into a report

pub mod analyze;
pub mod walk;
