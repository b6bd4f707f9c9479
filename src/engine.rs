/// Diff file processing pipeline
///
/// file -> segment -> { summary names, raw blocks } -> resolve + split each
/// block in parallel -> join by name.
///
/// Segmentation errors abort the load before any block is touched. After
/// that, every block is processed in isolation: a block that cannot be
/// resolved, or that panics while being split, is reported in
/// `LoadOutput::unresolved` and the rest of the batch carries on.
use crate::assemble::{Assembly, ProcessedBlock, assemble};
use crate::error::LoadError;
use crate::names::extract_summary_entries;
use crate::resolve::resolve_block;
use crate::segment::{Segments, segment};
use crate::split::{classify, split_diff};
use crate::types::{BlockFailure, DiffRecord, LoadOutput, RawBlock};
use log::{debug, error, info, warn};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Tuning for a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Worker threads for block processing (None = rayon default)
    pub threads: Option<usize>,
}

impl LoadOptions {
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }
}

/// Resolve, split and classify one raw block
fn process_block(raw: &RawBlock) -> Result<ProcessedBlock, BlockFailure> {
    let block = resolve_block(raw)?;
    let split = split_diff(&block.raw_body);
    let state = classify(block.kind, &block.raw_body, &split);
    Ok(ProcessedBlock { block, split, state })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn process_block_isolated(raw: &RawBlock) -> Result<ProcessedBlock, BlockFailure> {
    match panic::catch_unwind(AssertUnwindSafe(|| process_block(raw))) {
        Ok(result) => result,
        Err(payload) => Err(BlockFailure {
            index: raw.index,
            reason: format!("panicked while processing block: {}", panic_message(payload.as_ref())),
            first_line: raw.text.lines().map(str::trim).find(|l| !l.is_empty()).map(str::to_string),
        }),
    }
}

/// Process all blocks, in parallel when a thread pool can be built
///
/// Results come back in block order regardless of scheduling.
pub fn process_blocks(blocks: &[RawBlock], threads: Option<usize>) -> Vec<Result<ProcessedBlock, BlockFailure>> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }

    match builder.build() {
        Ok(pool) => pool.install(|| blocks.par_iter().map(process_block_isolated).collect()),
        Err(e) => {
            warn!("failed to create thread pool ({e}), processing blocks sequentially");
            blocks.iter().map(process_block_isolated).collect()
        }
    }
}

/// Turn segmented text into records
pub fn process_segments(segments: Segments, options: &LoadOptions) -> LoadOutput {
    let entries = extract_summary_entries(&segments.summary);
    info!("Diff Name Content got: {} test cases, {} blocks", entries.len(), segments.blocks.len());

    let mut processed = Vec::with_capacity(segments.blocks.len());
    let mut unresolved = Vec::new();

    for (raw, result) in segments.blocks.iter().zip(process_blocks(&segments.blocks, options.threads)) {
        match result {
            Ok(block) => processed.push(block),
            Err(_) if raw.text.trim().is_empty() => {
                debug!("Skipping blank block {}", raw.index);
            }
            Err(failure) => {
                warn!("Block {} could not be extracted: {}", failure.index, failure.reason);
                unresolved.push(failure);
            }
        }
    }

    let Assembly { records, orphans } = assemble(&entries, processed);

    LoadOutput { records, line_count: segments.line_count, unresolved, orphans, complete: true }
}

/// Run the whole pipeline over any buffered reader
pub fn process_reader<R: BufRead>(reader: R, options: &LoadOptions) -> Result<LoadOutput, LoadError> {
    let segments = segment(reader)?;
    Ok(process_segments(segments, options))
}

/// Load and process a diff file from disk
pub fn load_diff_file(path: &Path, options: &LoadOptions) -> Result<LoadOutput, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound { path: path.to_path_buf() });
    }

    info!("Start handling Diff File: {}", path.display());
    let file = File::open(path)?;
    match process_reader(BufReader::new(file), options) {
        Ok(output) => {
            info!("End of handling Diff File: {} ({} lines)", path.display(), output.line_count);
            Ok(output)
        }
        Err(e) => {
            error!("Failed to load and process diff file {}: {}", path.display(), e);
            Err(e)
        }
    }
}

/// Stateful handle around one diff file
///
/// Results can only be read once `run` has completed successfully.
#[derive(Debug)]
pub struct DiffLoader {
    path: PathBuf,
    options: LoadOptions,
    output: Option<LoadOutput>,
}

impl DiffLoader {
    /// Create a loader for an existing file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        if !path.is_file() {
            return Err(LoadError::NotFound { path });
        }
        Ok(DiffLoader { path, options: LoadOptions::default(), output: None })
    }

    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and process the file; running again re-reads it from scratch
    pub fn run(&mut self) -> Result<&LoadOutput, LoadError> {
        self.output = None;
        let output = load_diff_file(&self.path, &self.options)?;
        Ok(self.output.insert(output))
    }

    pub fn is_complete(&self) -> bool {
        self.output.as_ref().is_some_and(|o| o.complete)
    }

    pub fn output(&self) -> Result<&LoadOutput, LoadError> {
        match self.output.as_ref() {
            Some(output) if output.complete => Ok(output),
            _ => {
                error!("DiffLoader: diff data for {} has not been loaded and processed yet", self.path.display());
                Err(LoadError::NotProcessed)
            }
        }
    }

    pub fn records(&self) -> Result<&[DiffRecord], LoadError> {
        self.output().map(|o| o.records.as_slice())
    }

    pub fn into_output(self) -> Result<LoadOutput, LoadError> {
        self.output.filter(|o| o.complete).ok_or(LoadError::NotProcessed)
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
