//! Segmentation and per-test-case diff extraction for batch comparison logs.
//!
//! A diff file starts with a summary section ("Validation Results" ...
//! "End of Summary") that lists every test case with its completion status,
//! followed by one comparison block per test case. [`load_diff_file`] reads
//! such a file once and returns one [`DiffRecord`] per summary entry, each with
//! its baseline (`+`) and actual (`-`) text and an identical/different/error
//! state.

pub mod assemble;
pub mod engine;
pub mod error;
pub mod markers;
pub mod names;
pub mod report;
pub mod resolve;
pub mod segment;
pub mod split;
pub mod types;

pub use engine::{DiffLoader, LoadOptions, load_diff_file, process_reader};
pub use error::LoadError;
pub use types::{BlockFailure, BlockKind, DiffRecord, LoadOutput, RecordState, SplitAlignment, SummaryStatus};
