/// Test case name extraction from the summary section
use crate::markers::{COMPLETED_IN, FAILED_TO_COMPLETE_IN};
use crate::types::{SummaryEntry, SummaryStatus};
use log::debug;

/// Byte offset of the first ASCII case-insensitive occurrence of `needle`
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }
    hay.windows(needle.len()).position(|w| w.eq_ignore_ascii_case(needle))
}

fn name_before(line: &str, phrase: &str) -> Option<String> {
    // The phrases start with an ASCII space, so the offset is a char boundary
    let end = find_ignore_ascii_case(line, phrase)?;
    Some(line[..end].trim().to_string())
}

/// Parse the summary text into test case entries, in order of appearance
///
/// Lines mentioning neither " completed in " nor " failed to complete in " are
/// decoration and are skipped. Duplicate names are kept.
pub fn extract_summary_entries(summary: &str) -> Vec<SummaryEntry> {
    let mut entries = Vec::new();

    for line in summary.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let parsed = if line.contains(COMPLETED_IN) {
            name_before(line, COMPLETED_IN).map(|name| (name, SummaryStatus::Completed))
        } else if line.contains(FAILED_TO_COMPLETE_IN) {
            name_before(line, FAILED_TO_COMPLETE_IN).map(|name| (name, SummaryStatus::Failed))
        } else {
            None
        };

        match parsed {
            Some((name, status)) if !name.is_empty() => entries.push(SummaryEntry { name, status }),
            Some(_) => debug!("Summary line has a status phrase but no name: {:?}", line),
            None => {}
        }
    }

    debug!("Extracted {} test case names from summary", entries.len());
    entries
}

/// Names only, in summary order
pub fn extract_test_case_names(summary: &str) -> Vec<String> {
    extract_summary_entries(summary).into_iter().map(|e| e.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_and_failed_lines() {
        let summary = "Validation Results\n\
                       ==========\n\
                       3phase1 completed in 12.5s\n\
                       3phase2 failed to complete in 1.0s\n\
                       End of Summary\n";
        let entries = extract_summary_entries(summary);
        assert_eq!(
            entries,
            vec![
                SummaryEntry { name: "3phase1".to_string(), status: SummaryStatus::Completed },
                SummaryEntry { name: "3phase2".to_string(), status: SummaryStatus::Failed },
            ]
        );
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        let names = extract_test_case_names("b completed in 1s\na completed in 1s\nb completed in 2s\n");
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_leading_whitespace_trimmed() {
        let names = extract_test_case_names("    dyn case 7 completed in 0.1s   \n");
        assert_eq!(names, vec!["dyn case 7"]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let names = extract_test_case_names("x completed in y completed in 3s\n");
        assert_eq!(names, vec!["x"]);
    }

    #[test]
    fn test_lines_without_phrase_ignored() {
        assert!(extract_test_case_names("Validation Results\ncompleted\nEnd of Summary\n").is_empty());
        // Phrase matching is case-sensitive for detection
        assert!(extract_test_case_names("foo COMPLETED IN 2s\n").is_empty());
    }

    #[test]
    fn test_block_phrase_is_not_a_summary_entry() {
        assert!(extract_test_case_names("bar failed to complete.\n").is_empty());
    }

    #[test]
    fn test_find_ignore_ascii_case() {
        assert_eq!(find_ignore_ascii_case("abc Completed In x", " completed in "), Some(3));
        assert_eq!(find_ignore_ascii_case("ab", "abc"), None);
        assert_eq!(find_ignore_ascii_case("café completed in 1s", " completed in "), Some(5));
    }
}
