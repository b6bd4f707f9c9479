/// Console formatting module - Pure rendering concerns
///
/// This module handles all console output formatting including:
/// - Summary and record tables
/// - Side-by-side baseline/actual view
/// - Text truncation and padding
///
/// It writes to any `std::io::Write` destination, with or without colors.
use diffsplit::report::{RecordSummary, StatusIcon};
use diffsplit::{BlockFailure, BlockKind, DiffRecord, SplitAlignment};
use std::io::{self, Write};
use std::sync::OnceLock;
use term::color::Color;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

/// ANSI foreground code for a term color (0-7 normal, 8-15 bright)
fn ansi_code(color: Color) -> u32 {
    if color < 8 { 30 + color } else { 90 + (color - 8) }
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Write formatted text, optionally with color
    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.use_colors {
            write!(self.writer, "\x1b[{}m{}\x1b[0m", ansi_code(color), text)
        } else {
            write!(self.writer, "{}", text)
        }
    }

    /// Write the load summary block
    pub fn write_summary(&mut self, source: &str, line_count: usize, summary: &RecordSummary) -> io::Result<()> {
        let w = get_widths();
        writeln!(self.writer, "{}", "━".repeat(w.total))?;
        writeln!(self.writer, "Diff file: {}", source)?;
        writeln!(self.writer, "Lines read: {}   Test cases: {}", line_count, summary.total)?;
        writeln!(self.writer, "{}", "━".repeat(w.total))?;

        for (icon, label, count) in [
            (StatusIcon::Identical, "Identical", summary.identical),
            (StatusIcon::Different, "Different", summary.different),
            (StatusIcon::Error, "Error", summary.error),
        ] {
            self.write_colored(&format!("  {} {:<12}{:>8}", icon.as_str(), label, count), icon.color())?;
            writeln!(self.writer)?;
        }
        writeln!(self.writer)
    }

    /// Write the record table header
    pub fn write_record_header(&mut self) -> io::Result<()> {
        let w = get_widths();
        writeln!(
            self.writer,
            "┌{:─<s$}┬{:─<n$}┬{:─<d$}┐",
            "", "", "",
            s = w.status,
            n = w.name,
            d = w.detail
        )?;
        writeln!(
            self.writer,
            "│ {} │ {} │ {} │",
            truncate_with_padding("", w.status - 2),
            truncate_with_padding("Test case", w.name - 2),
            truncate_with_padding("Detail", w.detail - 2)
        )?;
        writeln!(
            self.writer,
            "├{:─<s$}┼{:─<n$}┼{:─<d$}┤",
            "", "", "",
            s = w.status,
            n = w.name,
            d = w.detail
        )
    }

    /// Write one record row, colored by state
    pub fn write_record_row(&mut self, record: &DiffRecord) -> io::Result<()> {
        let w = get_widths();
        let icon = StatusIcon::for_state(record.state);
        let row = format!(
            "│ {} │ {} │ {} │",
            truncate_with_padding(icon.as_str(), w.status - 2),
            truncate_with_padding(&record.name, w.name - 2),
            truncate_with_padding(&record_detail(record), w.detail - 2)
        );
        self.write_colored(&row, icon.color())?;
        writeln!(self.writer)
    }

    /// Write the record table footer
    pub fn write_record_footer(&mut self) -> io::Result<()> {
        let w = get_widths();
        writeln!(
            self.writer,
            "└{:─<s$}┴{:─<n$}┴{:─<d$}┘",
            "", "", "",
            s = w.status,
            n = w.name,
            d = w.detail
        )
    }

    /// Write blocks that did not become records
    pub fn write_extraction_problems(&mut self, unresolved: &[BlockFailure], orphans: &[String]) -> io::Result<()> {
        if unresolved.is_empty() && orphans.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "\nExtraction problems:")?;
        for failure in unresolved {
            let first = failure.first_line.as_deref().unwrap_or("<empty>");
            self.write_colored(
                &format!("  block #{}: {} (starts with {:?})", failure.index, failure.reason, first),
                term::color::BRIGHT_YELLOW,
            )?;
            writeln!(self.writer)?;
        }
        for name in orphans {
            self.write_colored(&format!("  block '{}' is not listed in the summary", name), term::color::BRIGHT_YELLOW)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    /// Write baseline and actual text in two columns
    ///
    /// Rows whose two sides differ are marked with `≠`.
    pub fn write_side_by_side(&mut self, record: &DiffRecord) -> io::Result<()> {
        let w = get_widths();
        // "│ " + left + " │" + marker + "│ " + right + " │"
        let column = (w.total.saturating_sub(9) / 2).max(10);

        let icon = StatusIcon::for_state(record.state);
        self.write_colored(&format!("{} {}", icon.as_str(), record.name), icon.color())?;
        writeln!(self.writer, "  ({})", record_detail(record))?;
        if record.alignment == Some(SplitAlignment::Unbalanced) {
            self.write_colored(
                "  baseline and actual line counts differ; rows below are not aligned",
                term::color::BRIGHT_YELLOW,
            )?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "┌{:─<c$}┬─┬{:─<c$}┐", "", "", c = column + 2)?;
        writeln!(
            self.writer,
            "│ {} │ │ {} │",
            truncate_with_padding("Baseline", column),
            truncate_with_padding("Actual", column)
        )?;
        writeln!(self.writer, "├{:─<c$}┼─┼{:─<c$}┤", "", "", c = column + 2)?;

        let left: Vec<&str> = record.baseline_text.lines().collect();
        let right: Vec<&str> = record.actual_text.lines().collect();
        for i in 0..left.len().max(right.len()) {
            let l = left.get(i).copied();
            let r = right.get(i).copied();
            let row = format!(
                "│ {} │{}│ {} │",
                truncate_with_padding(l.unwrap_or(""), column),
                if l == r { " " } else { "≠" },
                truncate_with_padding(r.unwrap_or(""), column)
            );
            if l == r {
                writeln!(self.writer, "{}", row)?;
            } else {
                self.write_colored(&row, term::color::BRIGHT_RED)?;
                writeln!(self.writer)?;
            }
        }

        writeln!(self.writer, "└{:─<c$}┴─┴{:─<c$}┘", "", "", c = column + 2)
    }

    /// Write the block body as extracted, before the +/- split
    pub fn write_raw_body(&mut self, record: &DiffRecord) -> io::Result<()> {
        let icon = StatusIcon::for_state(record.state);
        self.write_colored(&format!("{} {}", icon.as_str(), record.name), icon.color())?;
        writeln!(self.writer, "  ({})", record_detail(record))?;
        writeln!(self.writer, "{}", "─".repeat(get_widths().total))?;
        if record.raw_body.is_empty() {
            writeln!(self.writer, "<no diff block found>")
        } else {
            write!(self.writer, "{}", record.raw_body)
        }
    }
}

/// Short description of how a record was extracted
pub fn record_detail(record: &DiffRecord) -> String {
    let kind = match record.kind {
        Some(BlockKind::PostProcessed) => "completed",
        Some(BlockKind::FailedToComplete) => "failed to complete",
        None => return "no diff block found".to_string(),
    };
    match record.alignment {
        Some(SplitAlignment::Unbalanced) => format!("{}, {} B, unbalanced", kind, record.raw_size),
        _ => format!("{}, {} B", kind, record.raw_size),
    }
}

//
// Table Layout and Widths
//

/// Column widths for the record table
#[derive(Clone, Copy, Debug)]
pub struct TableWidths {
    pub status: usize,
    pub name: usize,
    pub detail: usize,
    pub total: usize, // Total table width including borders
}

impl TableWidths {
    pub fn new(terminal_width: usize) -> Self {
        // Borders: │ = 4 characters (1 before each column + 1 at end)
        let borders = 4;
        let available = terminal_width.saturating_sub(borders);

        // Status: "⚠" plus padding
        let status = 5;
        // Detail: "failed to complete, 123456 B, unbalanced"
        let detail = 44;

        // Name gets remaining space (for long test case names)
        let fixed_total = status + detail;
        let name = if available > fixed_total + 20 { available - fixed_total } else { 20 };

        TableWidths { status, name, detail, total: terminal_width }
    }
}

static CONSOLE_WIDTH_OVERRIDE: OnceLock<usize> = OnceLock::new();
static WIDTHS: OnceLock<TableWidths> = OnceLock::new();

/// Force a console width (for tests and --console-width); must run before any output
pub fn set_console_width(width: usize) {
    let _ = CONSOLE_WIDTH_OVERRIDE.set(width);
}

/// Get terminal width or default to 120
fn get_terminal_width() -> usize {
    if let Some(width) = CONSOLE_WIDTH_OVERRIDE.get() {
        return *width;
    }
    if let Some((Width(w), _)) = terminal_size() { w as usize } else { 120 }
}

/// Get table widths, computed on first use
pub fn get_widths() -> &'static TableWidths {
    WIDTHS.get_or_init(|| TableWidths::new(get_terminal_width()))
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate and pad string to exact width
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let display_w = display_width(s);

    if display_w <= width {
        return format!("{}{}", s, " ".repeat(width - display_w));
    }

    let mut result = String::new();
    let mut current_width = 0;

    // Reserve space for "..."
    let target_width = if width >= 3 { width - 3 } else { width };

    for c in s.chars() {
        let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
        if current_width + c_width > target_width {
            break;
        }
        result.push(c);
        current_width += c_width;
    }

    if width >= 3 {
        result.push_str("...");
        current_width += 3;
    }

    if current_width < width {
        result.push_str(&" ".repeat(width - current_width));
    }

    result
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
