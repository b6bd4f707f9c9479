use clap::Parser;
use std::path::PathBuf;

/// Environment variable consulted when no diff file is given on the command line
pub const DIFF_FILE_ENV: &str = "DIFFSPLIT_FILE";

#[derive(Parser, Debug, Clone)]
#[command(name = "diffsplit")]
#[command(about = "Split a batch comparison log into per-test-case baseline/actual diffs")]
#[command(version)]
pub struct CliArgs {
    /// Diff file to load (falls back to $DIFFSPLIT_FILE)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write a JSON report of all records to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Export the names of identical test cases to a .lst file
    #[arg(long)]
    pub export_passed: bool,

    /// Export the names of non-identical and errored test cases to a .lst file
    #[arg(long)]
    pub export_failed: bool,

    /// Directory for exported name lists (default: desktop, else current directory)
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Version tag appended to exported file names
    #[arg(long, value_name = "TAG")]
    pub version_tag: Option<String>,

    /// Media tag appended to exported file names
    #[arg(long, value_name = "TAG")]
    pub media: Option<String>,

    /// Area tag appended to exported file names
    #[arg(long, value_name = "TAG")]
    pub area: Option<String>,

    /// Do not append the current date and hour to exported file names
    #[arg(long)]
    pub no_timestamp: bool,

    /// Print baseline and actual text of this test case side by side
    #[arg(long, value_name = "NAME")]
    pub show: Option<String>,

    /// With --show, print the raw block content instead of split columns
    #[arg(long, requires = "show")]
    pub raw: bool,

    /// List every record, not only the summary counts
    #[arg(long)]
    pub list: bool,

    /// Restrict --list to records of one kind
    #[arg(long, value_enum, default_value = "all")]
    pub filter: diffsplit::report::RecordFilter,

    /// Write DiffNames_/Results_ dumps of the segmented content to this directory
    #[arg(long, value_name = "DIR")]
    pub dump: Option<PathBuf>,

    /// Worker threads for block processing (default: number of CPUs)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Override console width for testing (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // Empty tags are the same as no tag
        for tag in [&mut args.version_tag, &mut args.media, &mut args.area] {
            if tag.as_deref().is_some_and(|t| t.trim().is_empty()) {
                *tag = None;
            }
        }

        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.threads == Some(0) {
            return Err("--threads must be at least 1".to_string());
        }

        if let Some(width) = self.console_width
            && width < 40
        {
            return Err(format!("--console-width {} is too narrow (minimum 40)", width));
        }

        if self.show.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err("--show requires a test case name".to_string());
        }

        Ok(())
    }

    /// Any export that needs the export directory?
    pub fn wants_name_export(&self) -> bool {
        self.export_passed || self.export_failed
    }
}
