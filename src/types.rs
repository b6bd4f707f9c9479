/// Core data structures for extracted test cases
///
/// This module defines the records handed to callers once a diff file has been
/// segmented, resolved and split, plus the intermediate block types.

/// Tri-state outcome of a test case comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum RecordState {
    /// Baseline and actual match
    Identical,
    /// Baseline and actual differ, or the test case failed to complete
    Different,
    /// Extraction failed (no matching block, malformed block)
    #[default]
    Error,
}

impl RecordState {
    /// `Some(true)` identical, `Some(false)` different, `None` extraction error
    pub fn as_option(&self) -> Option<bool> {
        match self {
            RecordState::Identical => Some(true),
            RecordState::Different => Some(false),
            RecordState::Error => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordState::Identical => "identical",
            RecordState::Different => "different",
            RecordState::Error => "error",
        }
    }
}

/// How a block announced its test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BlockKind {
    /// "Post Processing...<name>"
    PostProcessed,
    /// "<name> failed to complete."
    FailedToComplete,
}

/// Status of a test case as listed in the summary section
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SummaryStatus {
    Completed,
    Failed,
}

/// Which branch the diff splitter took
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SplitAlignment {
    /// Baseline and actual have the same line count and were paired by index
    Paired,
    /// Line counts differ; each side was stripped independently
    Unbalanced,
}

/// A summary entry: test case name plus its reported status
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SummaryEntry {
    pub name: String,
    pub status: SummaryStatus,
}

/// Raw text of one test case block, exactly as captured from the stream
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawBlock {
    /// Position in the file, 0-based
    pub index: usize,
    pub text: String,
}

/// A block whose name marker was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBlock {
    pub index: usize,
    pub name: String,
    pub kind: BlockKind,
    /// Block content minus the marker line and sentinel lines
    pub raw_body: String,
}

/// Baseline/actual texts of a resolved block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDiff {
    pub baseline: String,
    pub actual: String,
    pub alignment: SplitAlignment,
}

/// A block that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlockFailure {
    pub index: usize,
    pub reason: String,
    /// First non-empty line of the block, for diagnostics
    pub first_line: Option<String>,
}

/// One test case as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiffRecord {
    pub name: String,
    pub summary_status: Option<SummaryStatus>,
    pub kind: Option<BlockKind>,
    pub raw_body: String,
    /// Size of the raw body in bytes
    pub raw_size: usize,
    pub baseline_text: String,
    pub actual_text: String,
    pub alignment: Option<SplitAlignment>,
    pub state: RecordState,
}

impl DiffRecord {
    /// A record with only its name known; stays in error state until merged
    pub fn with_name(name: impl Into<String>) -> Self {
        DiffRecord {
            name: name.into(),
            summary_status: None,
            kind: None,
            raw_body: String::new(),
            raw_size: 0,
            baseline_text: String::new(),
            actual_text: String::new(),
            alignment: None,
            state: RecordState::Error,
        }
    }

    pub fn is_identical(&self) -> Option<bool> {
        self.state.as_option()
    }

    pub fn is_error(&self) -> bool {
        self.state == RecordState::Error
    }
}

/// Everything a completed load hands back
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoadOutput {
    /// One record per summary entry, in summary order
    pub records: Vec<DiffRecord>,
    /// Number of lines read from the file
    pub line_count: usize,
    /// Blocks that had no name marker or failed while being processed
    pub unresolved: Vec<BlockFailure>,
    /// Names of resolved blocks that no summary entry claimed
    pub orphans: Vec<String>,
    pub complete: bool,
}

impl LoadOutput {
    pub fn find(&self, name: &str) -> Option<&DiffRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_error() {
        let record = DiffRecord::with_name("3phase1");
        assert!(record.is_error());
        assert_eq!(record.is_identical(), None);
        assert_eq!(record.state.as_str(), "error");
    }

    #[test]
    fn test_state_as_option() {
        assert_eq!(RecordState::Identical.as_option(), Some(true));
        assert_eq!(RecordState::Different.as_option(), Some(false));
        assert_eq!(RecordState::default(), RecordState::Error);
    }

    #[test]
    fn test_find_by_exact_name() {
        let output = LoadOutput {
            records: vec![DiffRecord::with_name("a"), DiffRecord::with_name("ab")],
            line_count: 0,
            unresolved: vec![],
            orphans: vec![],
            complete: true,
        };
        assert_eq!(output.find("ab").map(|r| r.name.as_str()), Some("ab"));
        assert!(output.find("A").is_none());
    }
}
