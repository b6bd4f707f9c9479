//! Report type definitions for the rendering model.
//!
//! This module defines the types used to turn extracted records into
//! counts, filters and displayable rows.

use crate::types::{DiffRecord, RecordState};
use term::color::Color;

/// Status icon for a record row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    /// Baseline and actual match: ✓
    Identical,
    /// Baseline and actual differ: ✗
    Different,
    /// Extraction failed: ⚠
    Error,
}

impl StatusIcon {
    pub fn for_state(state: RecordState) -> Self {
        match state {
            RecordState::Identical => StatusIcon::Identical,
            RecordState::Different => StatusIcon::Different,
            RecordState::Error => StatusIcon::Error,
        }
    }

    /// Get the unicode symbol for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusIcon::Identical => "✓",
            StatusIcon::Different => "✗",
            StatusIcon::Error => "⚠",
        }
    }

    /// Terminal color used for the whole row.
    pub fn color(&self) -> Color {
        match self {
            StatusIcon::Identical => term::color::BRIGHT_GREEN,
            StatusIcon::Different => term::color::BRIGHT_RED,
            StatusIcon::Error => term::color::BRIGHT_YELLOW,
        }
    }
}

/// Counts per record state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordSummary {
    /// Records whose baseline and actual match
    pub identical: usize,
    /// Records that differ or failed to complete
    pub different: usize,
    /// Records that could not be extracted
    pub error: usize,
    /// identical + different + error
    pub total: usize,
}

impl RecordSummary {
    pub fn all_identical(&self) -> bool {
        self.different == 0 && self.error == 0
    }
}

/// Which records an export or listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordFilter {
    /// Identical records only
    Passed,
    /// Everything that is not identical (different or error)
    FailedOrError,
    Different,
    Error,
    All,
}

impl RecordFilter {
    pub fn matches(&self, record: &DiffRecord) -> bool {
        match self {
            RecordFilter::Passed => record.state == RecordState::Identical,
            RecordFilter::FailedOrError => record.state != RecordState::Identical,
            RecordFilter::Different => record.state == RecordState::Different,
            RecordFilter::Error => record.state == RecordState::Error,
            RecordFilter::All => true,
        }
    }
}
