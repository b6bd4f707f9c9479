/// Single-pass segmentation of a diff file
///
/// The file is read forward once. Everything up to and including the
/// "End of Summary" line becomes the summary text; everything after it is cut
/// into raw blocks at each "Post Processing..." / "failed to complete." line.
use crate::error::LoadError;
use crate::markers::{self, LineClass};
use crate::types::RawBlock;
use log::{debug, info};
use std::io::BufRead;

/// Whether a boundary kind has been seen since segmentation started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryState {
    #[default]
    NotYetOpened,
    Opened,
}

impl BoundaryState {
    pub fn is_opened(&self) -> bool {
        matches!(self, BoundaryState::Opened)
    }
}

/// Output of a completed segmentation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    /// Summary text, ending with the "End of Summary" line
    pub summary: String,
    /// Raw blocks in file order; never empty
    pub blocks: Vec<RawBlock>,
    pub line_count: usize,
}

/// State of one segmentation pass
///
/// A session belongs to exactly one load; nothing here is shared between
/// loads running at the same time.
#[derive(Debug, Default)]
pub struct SegmentSession {
    summary_buf: String,
    summary: Option<String>,
    saw_validation: bool,
    block_lines: Vec<String>,
    post_processing: BoundaryState,
    failed: BoundaryState,
    blocks: Vec<RawBlock>,
    line_count: usize,
}

impl SegmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line, without its line terminator
    pub fn feed_line(&mut self, line: &str) -> Result<(), LoadError> {
        self.line_count += 1;

        if self.summary.is_none() {
            self.summary_buf.push_str(line);
            self.summary_buf.push('\n');

            if !self.saw_validation && markers::is_validation_results(line) {
                debug!("Validation Results marker at line {}", self.line_count);
                self.saw_validation = true;
            }

            if markers::is_end_of_summary(line) {
                if !self.saw_validation {
                    return Err(LoadError::MissingValidation { line: self.line_count });
                }
                info!("Validation Results found, summary captured ({} lines)", self.line_count);
                self.summary = Some(std::mem::take(&mut self.summary_buf));
            }
            return Ok(());
        }

        self.feed_block_line(line);
        Ok(())
    }

    fn feed_block_line(&mut self, line: &str) {
        self.block_lines.push(line.to_string());

        let class = LineClass::of(line);
        if !class.is_boundary() {
            return;
        }

        if self.post_processing.is_opened() || self.failed.is_opened() {
            // Close the previous block; the boundary line opens the next one
            let boundary = self.block_lines.pop();
            self.flush_block();
            self.block_lines.extend(boundary);
        } else {
            // First boundary: nothing before it belongs to any block
            self.block_lines.clear();
            self.block_lines.push(line.to_string());
            // Post processing wins when a line carries both markers
            if class.post_processing {
                self.post_processing = BoundaryState::Opened;
            } else {
                self.failed = BoundaryState::Opened;
            }
        }
    }

    fn flush_block(&mut self) {
        let mut text = String::new();
        for line in self.block_lines.drain(..) {
            text.push_str(&line);
            text.push('\n');
        }
        let index = self.blocks.len();
        debug!("Block {} captured ({} bytes)", index, text.len());
        self.blocks.push(RawBlock { index, text });
    }

    /// End of stream: emit the trailing block and hand back the segments
    pub fn finish(mut self) -> Result<Segments, LoadError> {
        let Some(summary) = self.summary.take() else {
            return Err(LoadError::MissingEndOfSummary { lines: self.line_count });
        };

        self.flush_block();

        Ok(Segments { summary, blocks: self.blocks, line_count: self.line_count })
    }
}

/// Segment a whole stream
///
/// Invalid UTF-8 is replaced rather than rejected, and a leading byte order
/// mark is dropped. Line terminators (`\n` or `\r\n`) are not part of lines.
pub fn segment<R: BufRead>(mut reader: R) -> Result<Segments, LoadError> {
    let mut session = SegmentSession::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let decoded = String::from_utf8_lossy(&buf);
        let mut line: &str = &decoded;
        if session.line_count == 0 {
            line = line.strip_prefix('\u{feff}').unwrap_or(line);
        }

        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        session.feed_line(line)?;
    }

    session.finish()
}

#[cfg(test)]
#[path = "segment_test.rs"]
mod segment_test;
