/// Splitting a diff body into baseline (`+`) and actual (`-`) text
///
/// Unprefixed lines are shared context and appear on both sides unchanged.
use crate::markers::{self, ARE_IDENTICAL, MINUS_CHAR, PLUS_CHAR};
use crate::types::{BlockKind, RecordState, SplitAlignment, SplitDiff};

/// Split a raw body into baseline and actual text
///
/// Each side is computed from the full body: baseline drops `-` lines, actual
/// drops `+` lines. When both sides end up with the same number of lines they
/// are paired by index; otherwise each side is stripped on its own and the
/// result is flagged `Unbalanced` so callers know the columns do not line up.
pub fn split_diff(raw_body: &str) -> SplitDiff {
    let lines: Vec<&str> = raw_body.lines().collect();

    let mut baseline: Vec<&str> = lines.iter().copied().filter(|l| !markers::is_minus(l)).collect();
    let mut actual: Vec<&str> = lines.iter().copied().filter(|l| !markers::is_plus(l)).collect();

    let alignment = if baseline.len() == actual.len() {
        for (base, act) in baseline.iter_mut().zip(actual.iter_mut()) {
            *base = base.trim_start_matches(PLUS_CHAR);
            *act = act.trim_start_matches(MINUS_CHAR);
        }
        SplitAlignment::Paired
    } else {
        for base in baseline.iter_mut() {
            *base = base.trim_start_matches(PLUS_CHAR);
        }
        for act in actual.iter_mut() {
            *act = act.trim_start_matches(MINUS_CHAR);
        }
        SplitAlignment::Unbalanced
    };

    SplitDiff { baseline: baseline.join("\n"), actual: actual.join("\n"), alignment }
}

/// Collapse every whitespace run so layout-only differences compare equal
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decide whether a resolved block is identical
///
/// A test case that failed to complete is never identical. A completed one is
/// identical when the comparison tool says so, or when its baseline and actual
/// only differ in whitespace.
pub fn classify(kind: BlockKind, raw_body: &str, split: &SplitDiff) -> RecordState {
    match kind {
        BlockKind::FailedToComplete => RecordState::Different,
        BlockKind::PostProcessed => {
            if raw_body.contains(ARE_IDENTICAL)
                || normalize_whitespace(&split.baseline) == normalize_whitespace(&split.actual)
            {
                RecordState::Identical
            } else {
                RecordState::Different
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paired_split() {
        let split = split_diff("header\n+1.0 2.0\n-1.0 2.5\n+3.0\n-3.1\nfooter\n");
        assert_eq!(split.alignment, SplitAlignment::Paired);
        assert_eq!(split.baseline, "header\n1.0 2.0\n3.0\nfooter");
        assert_eq!(split.actual, "header\n1.0 2.5\n3.1\nfooter");
    }

    #[test]
    fn test_paired_round_trip_keeps_order() {
        let body: String = (0..5).map(|i| format!("+b{i}\n-a{i}\n")).collect();
        let split = split_diff(&body);
        assert_eq!(split.baseline.lines().count(), 5);
        assert_eq!(split.actual.lines().count(), 5);
        assert_eq!(split.baseline, "b0\nb1\nb2\nb3\nb4");
        assert_eq!(split.actual, "a0\na1\na2\na3\na4");
    }

    #[test]
    fn test_unbalanced_split() {
        let split = split_diff("+one\n+two\n+three\n-uno\n");
        assert_eq!(split.alignment, SplitAlignment::Unbalanced);
        assert_eq!(split.baseline, "one\ntwo\nthree");
        assert_eq!(split.actual, "uno");
    }

    #[test]
    fn test_repeated_prefix_stripped() {
        let split = split_diff("++x\n--y\n");
        assert_eq!(split.baseline, "x");
        assert_eq!(split.actual, "y");
    }

    #[test]
    fn test_minus_in_baseline_context_kept() {
        // Only the leading marker of the side's own kind is stripped
        let split = split_diff("+-5\n--5\n");
        assert_eq!(split.baseline, "-5");
        assert_eq!(split.actual, "5");
    }

    #[test]
    fn test_unprefixed_text_on_both_sides() {
        let split = split_diff("some error text\nmore\n");
        assert_eq!(split.baseline, "some error text\nmore");
        assert_eq!(split.actual, "some error text\nmore");
        assert_eq!(split.alignment, SplitAlignment::Paired);
    }

    #[test]
    fn test_empty_body() {
        let split = split_diff("");
        assert_eq!(split.baseline, "");
        assert_eq!(split.actual, "");
    }

    #[test]
    fn test_classify_identical_phrase() {
        let body = "Results...\nFiles a.dmp and b.dmp are identical\n";
        assert_eq!(classify(BlockKind::PostProcessed, body, &split_diff(body)), RecordState::Identical);
    }

    #[test]
    fn test_classify_whitespace_only_difference() {
        let body = "+1.0   2.0\n-1.0 2.0\n";
        assert_eq!(classify(BlockKind::PostProcessed, body, &split_diff(body)), RecordState::Identical);
    }

    #[test]
    fn test_classify_real_difference() {
        let body = "+line1\n-line1modified\n";
        assert_eq!(classify(BlockKind::PostProcessed, body, &split_diff(body)), RecordState::Different);
    }

    #[test]
    fn test_classify_unprefixed_body_is_identical() {
        // No diff lines: both sides carry the same text
        let body = "Results...\nsame text\n";
        assert_eq!(classify(BlockKind::PostProcessed, body, &split_diff(body)), RecordState::Identical);
    }

    #[test]
    fn test_classify_failed_block() {
        let body = "some error text\n";
        assert_eq!(classify(BlockKind::FailedToComplete, body, &split_diff(body)), RecordState::Different);
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a\t b\n\nc "), "a b c");
    }
}
