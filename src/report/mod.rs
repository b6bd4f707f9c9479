//! Report generation module - counts, filters and exports.
//!
//! This module handles:
//! - Counting records per identical / different / error state
//! - Filtering records for name-list exports
//! - Export to name lists, JSON, and raw dumps
//!
//! Console rendering lives in the binary's console_format module.
//!
//! # Module Organization
//!
//! - `types` - StatusIcon, RecordSummary, RecordFilter
//! - `stats` - Summary statistics and grouping
//! - `export` - Name list, JSON and dump writers

mod export;
mod stats;
mod types;

pub use types::{RecordFilter, RecordSummary, StatusIcon};

pub use stats::{group_by_state, summarize_records};

pub use export::{export_json_report, export_names, write_record_dump};
