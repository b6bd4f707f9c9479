/// Line classification for comparison logs
///
/// Every predicate here is pure: a line either carries a marker or it does not.
/// Callers decide precedence when a line matches more than one marker.

/// Character repeated across a full line to draw a visual separator
pub const SPLIT_CHAR: char = '#';
/// Prefix of a baseline (expected) line inside a diff body
pub const PLUS_CHAR: char = '+';
/// Prefix of an actual (observed) line inside a diff body
pub const MINUS_CHAR: char = '-';

pub const VALIDATION_RESULTS: &str = "Validation Results";
pub const END_OF_SUMMARY: &str = "End of Summary";
pub const COMPLETED_IN: &str = " completed in ";
pub const FAILED_TO_COMPLETE_IN: &str = " failed to complete in ";
pub const POST_PROCESSING: &str = "Post Processing...";
pub const FAILED_TO_COMPLETE: &str = " failed to complete.";
pub const ARE_IDENTICAL: &str = "are identical";

pub fn is_validation_results(line: &str) -> bool {
    line.contains(VALIDATION_RESULTS)
}

pub fn is_end_of_summary(line: &str) -> bool {
    line.contains(END_OF_SUMMARY)
}

/// "Post Processing..." opens the block of a test case that ran to completion
pub fn is_post_processing(line: &str) -> bool {
    line.starts_with(POST_PROCESSING) || line.contains(POST_PROCESSING)
}

/// "<name> failed to complete." opens the block of a test case that aborted
pub fn is_failed_to_complete(line: &str) -> bool {
    line.ends_with(FAILED_TO_COMPLETE) || line.contains(FAILED_TO_COMPLETE)
}

pub fn is_plus(line: &str) -> bool {
    line.starts_with(PLUS_CHAR)
}

pub fn is_minus(line: &str) -> bool {
    line.starts_with(MINUS_CHAR)
}

/// A line wrapped by the split character on both ends, e.g. `#######`
pub fn is_sentinel(line: &str) -> bool {
    line.starts_with(SPLIT_CHAR) && line.ends_with(SPLIT_CHAR)
}

/// All marker matches of a single line, tested independently
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineClass {
    pub validation_results: bool,
    pub end_of_summary: bool,
    pub post_processing: bool,
    pub failed_to_complete: bool,
    pub plus: bool,
    pub minus: bool,
    pub sentinel: bool,
}

impl LineClass {
    pub fn of(line: &str) -> Self {
        LineClass {
            validation_results: is_validation_results(line),
            end_of_summary: is_end_of_summary(line),
            post_processing: is_post_processing(line),
            failed_to_complete: is_failed_to_complete(line),
            plus: is_plus(line),
            minus: is_minus(line),
            sentinel: is_sentinel(line),
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.post_processing || self.failed_to_complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_markers() {
        assert!(is_validation_results("=== Validation Results ==="));
        assert!(is_end_of_summary("--- End of Summary ---"));
        assert!(!is_end_of_summary("end of summary"));
    }

    #[test]
    fn test_boundary_markers() {
        assert!(is_post_processing("Post Processing...3phase1"));
        assert!(is_post_processing("   Post Processing...3phase1"));
        assert!(is_failed_to_complete("3phase2 failed to complete."));
        assert!(is_failed_to_complete("3phase2 failed to complete. (see log)"));
        // The summary phrase is not a block boundary
        assert!(!is_failed_to_complete("3phase2 failed to complete in 12s"));
        assert!(!LineClass::of("Results...").is_boundary());
    }

    #[test]
    fn test_prefix_markers() {
        assert!(is_plus("+1.0 2.0"));
        assert!(is_minus("-1.0 2.1"));
        assert!(!is_plus(" +1.0"));
        assert!(!is_minus(""));
    }

    #[test]
    fn test_sentinel() {
        assert!(is_sentinel("#######################"));
        assert!(is_sentinel("#"));
        assert!(is_sentinel("# section #"));
        assert!(!is_sentinel("# comment"));
        assert!(!is_sentinel(""));
    }

    #[test]
    fn test_line_class_matches_independently() {
        let class = LineClass::of("Post Processing...x failed to complete.");
        assert!(class.post_processing);
        assert!(class.failed_to_complete);
        assert!(class.is_boundary());
        assert!(!class.plus);

        assert_eq!(LineClass::of("plain context"), LineClass::default());
    }
}
