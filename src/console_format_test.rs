/// Tests for console formatting module
///
/// Every test renders with a fixed width so output is reproducible.
#[cfg(test)]
mod tests {
    use crate::console_format::*;
    use diffsplit::report::RecordSummary;
    use diffsplit::{BlockFailure, BlockKind, DiffRecord, RecordState, SplitAlignment};

    /// Standard width for tests to ensure reproducible output
    const TEST_CONSOLE_WIDTH: usize = 120;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut TableWriter<&mut Vec<u8>>) -> std::io::Result<()>,
    {
        set_console_width(TEST_CONSOLE_WIDTH);
        let mut buf = Vec::new();
        {
            let mut writer = TableWriter::new(&mut buf, false);
            f(&mut writer).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    fn different_record() -> DiffRecord {
        let mut record = DiffRecord::with_name("3phase1");
        record.kind = Some(BlockKind::PostProcessed);
        record.state = RecordState::Different;
        record.raw_size = 24;
        record.baseline_text = "a\nsame\nb".to_string();
        record.actual_text = "x\nsame\ny".to_string();
        record.alignment = Some(SplitAlignment::Paired);
        record
    }

    #[test]
    fn test_display_width_unicode() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("│"), 1);
        assert_eq!(display_width("✓✗⚠"), 3);
        assert_eq!(display_width("📦"), 2);
    }

    #[test]
    fn test_truncate_with_padding() {
        assert_eq!(truncate_with_padding("hi", 5), "hi   ");
        assert_eq!(truncate_with_padding("hello", 5), "hello");
        assert_eq!(truncate_with_padding("hello world", 8), "hello...");
        assert_eq!(display_width(&truncate_with_padding("test 📦 box", 10)), 10);
    }

    #[test]
    fn test_table_widths_fill_terminal() {
        let w = TableWidths::new(120);
        assert_eq!(w.status + w.name + w.detail + 4, 120);

        let narrow = TableWidths::new(40);
        assert_eq!(narrow.name, 20);
    }

    #[test]
    fn test_record_detail() {
        assert_eq!(record_detail(&different_record()), "completed, 24 B");
        assert_eq!(record_detail(&DiffRecord::with_name("x")), "no diff block found");

        let mut unbalanced = different_record();
        unbalanced.kind = Some(BlockKind::FailedToComplete);
        unbalanced.alignment = Some(SplitAlignment::Unbalanced);
        assert_eq!(record_detail(&unbalanced), "failed to complete, 24 B, unbalanced");
    }

    #[test]
    fn test_summary_counts() {
        let summary = RecordSummary { identical: 3, different: 1, error: 2, total: 6 };
        let out = render(|w| w.write_summary("run.dif", 420, &summary));
        assert!(out.contains("Diff file: run.dif"));
        assert!(out.contains("Lines read: 420"));
        assert!(out.contains("✓ Identical"));
        assert!(out.contains("⚠ Error"));
        assert!(!out.contains("\x1b["), "plain writer must not emit escapes");
    }

    #[test]
    fn test_record_rows_have_table_width() {
        let out = render(|w| {
            w.write_record_header()?;
            w.write_record_row(&different_record())?;
            w.write_record_footer()
        });
        for line in out.lines() {
            assert_eq!(display_width(line), TEST_CONSOLE_WIDTH, "line: {:?}", line);
        }
        assert!(out.contains("3phase1"));
        assert!(out.contains("✗"));
    }

    #[test]
    fn test_side_by_side_marks_differences() {
        let out = render(|w| w.write_side_by_side(&different_record()));
        let rows: Vec<&str> = out.lines().filter(|l| l.contains("same") || l.contains("│ a")).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().any(|r| r.contains("│≠│")));
        assert!(rows.iter().any(|r| r.contains("│ │") && r.contains("same")));
    }

    #[test]
    fn test_side_by_side_flags_unbalanced() {
        let mut record = different_record();
        record.alignment = Some(SplitAlignment::Unbalanced);
        record.actual_text = "x".to_string();
        let out = render(|w| w.write_side_by_side(&record));
        assert!(out.contains("not aligned"));
    }

    #[test]
    fn test_raw_body_printed_verbatim() {
        let mut record = different_record();
        record.raw_body = "NODE\n+ 12 0.1250\n- 12 0.1275\n".to_string();
        let out = render(|w| w.write_raw_body(&record));
        assert!(out.contains("3phase1"));
        assert!(out.ends_with("+ 12 0.1250\n- 12 0.1275\n"));

        let empty = render(|w| w.write_raw_body(&DiffRecord::with_name("ghost")));
        assert!(empty.contains("<no diff block found>"));
    }

    #[test]
    fn test_extraction_problems() {
        let failures = vec![BlockFailure {
            index: 3,
            reason: "no marker".to_string(),
            first_line: Some("junk".to_string()),
        }];
        let out = render(|w| w.write_extraction_problems(&failures, &["ghost".to_string()]));
        assert!(out.contains("block #3: no marker"));
        assert!(out.contains("'ghost'"));

        assert_eq!(render(|w| w.write_extraction_problems(&[], &[])), "");
    }

    #[test]
    fn test_colors_use_ansi_codes() {
        set_console_width(TEST_CONSOLE_WIDTH);
        let mut buf = Vec::new();
        TableWriter::new(&mut buf, true).write_record_row(&different_record()).unwrap();
        let out = String::from_utf8(buf).unwrap();
        // BRIGHT_RED is term color 9
        assert!(out.starts_with("\x1b[91m"));
    }
}
