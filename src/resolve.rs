/// Block resolution: find the test case name of a raw block and isolate its body
use crate::markers::{self, FAILED_TO_COMPLETE, POST_PROCESSING};
use crate::types::{BlockFailure, BlockKind, RawBlock, ResolvedBlock};

/// Resolve one raw block
///
/// Lines are trimmed and empty lines dropped. Sentinel lines are skipped. The
/// first marker line names the block; any later marker line is kept as body.
pub fn resolve_block(block: &RawBlock) -> Result<ResolvedBlock, BlockFailure> {
    let mut name: Option<(String, BlockKind)> = None;
    let mut raw_body = String::new();

    for line in block.text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if markers::is_sentinel(line) {
            continue;
        }

        if name.is_none() {
            if markers::is_post_processing(line) {
                name = Some((line.replace(POST_PROCESSING, "").trim().to_string(), BlockKind::PostProcessed));
                continue;
            }
            if markers::is_failed_to_complete(line) {
                name = Some((line.replace(FAILED_TO_COMPLETE, "").trim().to_string(), BlockKind::FailedToComplete));
                continue;
            }
        }

        raw_body.push_str(line);
        raw_body.push('\n');
    }

    match name {
        Some((name, kind)) if !name.is_empty() => {
            Ok(ResolvedBlock { index: block.index, name, kind, raw_body })
        }
        Some(_) => Err(failure(block, "marker line carries no test case name")),
        None => Err(failure(block, "no 'Post Processing...' or 'failed to complete.' line in block")),
    }
}

fn failure(block: &RawBlock, reason: &str) -> BlockFailure {
    BlockFailure {
        index: block.index,
        reason: reason.to_string(),
        first_line: block.text.lines().map(str::trim).find(|l| !l.is_empty()).map(str::to_string),
    }
}
