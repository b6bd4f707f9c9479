/// Configuration resolution module
///
/// This module handles:
/// - Resolving the input diff file (argument or environment)
/// - Resolving the export directory
/// - Building export file names from tags and a timestamp
/// - Collecting load options
use crate::cli::{CliArgs, DIFF_FILE_ENV};
use diffsplit::LoadOptions;
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub export_dir: PathBuf,
    /// File name stem for exports, without extension
    pub export_stem: String,
    pub load_options: LoadOptions,
}

impl RunConfig {
    /// Path of an exported name list, e.g. `<dir>/<stem>_failed.lst`
    pub fn export_path(&self, suffix: &str, extension: &str) -> PathBuf {
        self.export_dir.join(format!("{}_{}.{}", self.export_stem, suffix, extension))
    }
}

/// Build a complete RunConfig from CLI arguments
pub fn build_run_config(args: &CliArgs) -> Result<RunConfig, String> {
    let input = resolve_input(args.file.as_deref(), env::var(DIFF_FILE_ENV).ok())?;
    debug!("Using diff file {:?}", input);

    let export_dir = args
        .export_dir
        .clone()
        .or_else(dirs::desktop_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    if args.wants_name_export() && !export_dir.is_dir() {
        return Err(format!("Export directory {} does not exist", export_dir.display()));
    }

    let timestamp = if args.no_timestamp { None } else { Some(chrono::Local::now().format("%m_%d_%y_%H").to_string()) };
    let stem = file_stem(&input);
    let export_stem = export_file_stem(
        &stem,
        args.version_tag.as_deref(),
        args.media.as_deref(),
        args.area.as_deref(),
        timestamp.as_deref(),
    );
    debug!("Export stem {}", export_stem);

    Ok(RunConfig {
        input,
        export_dir,
        export_stem,
        load_options: LoadOptions::default().with_threads(args.threads),
    })
}

/// Pick the diff file: explicit argument first, then the environment
fn resolve_input(arg: Option<&Path>, env_value: Option<String>) -> Result<PathBuf, String> {
    let input = match (arg, env_value) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(value)) if !value.trim().is_empty() => PathBuf::from(value),
        _ => return Err(format!("No diff file given. Pass FILE or set {}", DIFF_FILE_ENV)),
    };

    if !input.is_file() {
        return Err(format!("Diff file {} does not exist", input.display()));
    }
    Ok(input)
}

fn file_stem(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "diff".to_string())
}

/// Append non-blank tags to the input file's stem
///
/// `run` + version `v15` + media `m302` + timestamp -> `run_v15_m302_10_18_26_14`
pub fn export_file_stem(
    stem: &str,
    version: Option<&str>,
    media: Option<&str>,
    area: Option<&str>,
    timestamp: Option<&str>,
) -> String {
    let mut name = stem.to_string();
    for tag in [version, media, area, timestamp].into_iter().flatten() {
        let tag = tag.trim();
        if !tag.is_empty() {
            name.push('_');
            name.push_str(tag);
        }
    }
    name
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
