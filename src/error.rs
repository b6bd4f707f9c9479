/// Errors that abort a whole diff file load
///
/// Per-block and per-name problems are not errors at this level; they are
/// collected into `LoadOutput` so the rest of the batch survives.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("diff file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read diff file: {0}")]
    Io(#[from] std::io::Error),

    #[error("'End of Summary' found at line {line} before any 'Validation Results' section; file structure is not right")]
    MissingValidation { line: usize },

    #[error("reached end of file after {lines} lines without an 'End of Summary' marker")]
    MissingEndOfSummary { lines: usize },

    #[error("diff data has not been loaded and processed yet")]
    NotProcessed,
}

impl LoadError {
    /// Structural errors mean the file itself is malformed, not unreadable
    pub fn is_structural(&self) -> bool {
        matches!(self, LoadError::MissingValidation { .. } | LoadError::MissingEndOfSummary { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_classification() {
        assert!(LoadError::MissingValidation { line: 3 }.is_structural());
        assert!(LoadError::MissingEndOfSummary { lines: 10 }.is_structural());
        assert!(!LoadError::NotProcessed.is_structural());
        assert!(!LoadError::NotFound { path: PathBuf::from("x.dif") }.is_structural());
    }

    #[test]
    fn test_messages_name_the_marker() {
        let msg = LoadError::MissingValidation { line: 7 }.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("Validation Results"));
    }
}
