/// Joining summary names with resolved blocks
///
/// Blocks are indexed by name in file order. Each summary entry takes the
/// first block with its exact name that no earlier entry has taken, so a
/// duplicated name pairs with its blocks in order.
use crate::types::{DiffRecord, SplitDiff, ResolvedBlock, RecordState, SummaryEntry};
use log::warn;
use std::collections::{HashMap, VecDeque};

/// A resolved block together with its split texts and classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedBlock {
    pub block: ResolvedBlock,
    pub split: SplitDiff,
    pub state: RecordState,
}

/// Result of the join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub records: Vec<DiffRecord>,
    /// Names of blocks no summary entry claimed, in file order
    pub orphans: Vec<String>,
}

/// Merge summary entries with processed blocks
pub fn assemble(entries: &[SummaryEntry], blocks: Vec<ProcessedBlock>) -> Assembly {
    let mut by_name: HashMap<String, VecDeque<ProcessedBlock>> = HashMap::new();
    for processed in blocks {
        by_name.entry(processed.block.name.clone()).or_default().push_back(processed);
    }

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut record = DiffRecord::with_name(entry.name.clone());
        record.summary_status = Some(entry.status);

        match by_name.get_mut(&entry.name).and_then(VecDeque::pop_front) {
            Some(processed) => merge(&mut record, processed),
            None => warn!("Current handling TestCase: {} has no matching diff block", entry.name),
        }
        records.push(record);
    }

    let mut leftovers: Vec<ProcessedBlock> = by_name.into_values().flatten().collect();
    leftovers.sort_by_key(|p| p.block.index);
    let orphans: Vec<String> = leftovers.into_iter().map(|p| p.block.name).collect();
    for name in &orphans {
        warn!("Diff block {} is not listed in the summary", name);
    }

    Assembly { records, orphans }
}

fn merge(record: &mut DiffRecord, processed: ProcessedBlock) {
    let ProcessedBlock { block, split, state } = processed;
    record.kind = Some(block.kind);
    record.raw_size = block.raw_body.len();
    record.raw_body = block.raw_body;
    record.baseline_text = split.baseline;
    record.actual_text = split.actual;
    record.alignment = Some(split.alignment);
    record.state = state;
}
