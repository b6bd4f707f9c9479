//! Report export functions.
//!
//! This module writes extracted records to files: plain name lists, a JSON
//! report, and raw dumps of the segmented content.

use super::stats::summarize_records;
use super::types::RecordFilter;
use crate::types::{DiffRecord, LoadOutput};
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Separator between raw bodies in the results dump
const DUMP_SEPARATOR_CHAR: char = '$';
const DUMP_SEPARATOR_WIDTH: usize = 64;

/// Write the names of matching records, one per line.
///
/// # Returns
/// The number of names written.
pub fn export_names(output_path: &Path, records: &[DiffRecord], filter: RecordFilter) -> std::io::Result<usize> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    let mut count = 0;

    for record in records.iter().filter(|r| filter.matches(r)) {
        writeln!(writer, "{}", record.name)?;
        count += 1;
    }

    writer.flush()?;
    debug!("Exported {} names ({:?}) to {}", count, filter, output_path.display());
    Ok(count)
}

/// Export a full load as JSON.
///
/// # Arguments
/// * `output_path` - Path to write the JSON file
/// * `output` - The completed load
/// * `source` - The diff file the load came from
pub fn export_json_report(output_path: &Path, output: &LoadOutput, source: &Path) -> std::io::Result<()> {
    use serde_json::json;

    let summary = summarize_records(&output.records);

    let report = json!({
        "source": source.display().to_string(),
        "generated": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "line_count": output.line_count,
        "summary": summary,
        "unresolved_blocks": output.unresolved,
        "orphan_blocks": output.orphans,
        "records": output.records,
    });

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, &report)?;

    Ok(())
}

/// Write the segmented content for inspection.
///
/// Produces `DiffNames_<stem>.txt` with one name per line and
/// `Results_<stem>.txt` with every raw body, separated by a line of `$`.
///
/// # Returns
/// Paths of the two files written.
pub fn write_record_dump(dump_dir: &Path, stem: &str, output: &LoadOutput) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dump_dir)?;

    let names_path = dump_dir.join(format!("DiffNames_{}.txt", stem));
    let names: Vec<&str> = output.records.iter().map(|r| r.name.as_str()).collect();
    fs::write(&names_path, names.join("\n"))?;

    let results_path = dump_dir.join(format!("Results_{}.txt", stem));
    let separator = format!("\n{}\n", DUMP_SEPARATOR_CHAR.to_string().repeat(DUMP_SEPARATOR_WIDTH));
    let bodies: Vec<&str> = output.records.iter().map(|r| r.raw_body.as_str()).collect();
    fs::write(&results_path, bodies.join(&separator))?;

    Ok(vec![names_path, results_path])
}
