// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod console_format;
mod ui;

use config::RunConfig;
use console_format::TableWriter;
use diffsplit::report::{self, RecordFilter};
use diffsplit::{DiffLoader, LoadOutput};
use std::io::{self, IsTerminal, Write};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Set console width override if specified (for testing)
    if let Some(width) = args.console_width {
        console_format::set_console_width(width);
    }

    let config = match config::build_run_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    ui::status(&format!("Loading {}", config.input.display()));

    let mut loader = match DiffLoader::open(&config.input) {
        Ok(l) => l.with_options(config.load_options.clone()),
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = loader.run() {
        ui::print_error(&format!("Failed to load diff file: {}", e));
        std::process::exit(1);
    }

    let output = match loader.output() {
        Ok(o) => o,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = print_console_report(output, &args, &config) {
        eprintln!("Warning: Failed to write console report: {}", e);
    }

    generate_exports(output, &args, &config);

    // Determine exit code
    let summary = report::summarize_records(&output.records);
    let exit_code = if summary.all_identical() { 0 } else { 2 };

    std::process::exit(exit_code);
}

/// Print summary, optional record list, optional side-by-side or raw view
fn print_console_report(output: &LoadOutput, args: &cli::CliArgs, config: &RunConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let use_colors = !args.no_color && stdout.is_terminal();
    let mut lock = stdout.lock();
    let mut writer = TableWriter::new(&mut lock, use_colors);

    let summary = report::summarize_records(&output.records);
    writer.write_summary(&config.input.display().to_string(), output.line_count, &summary)?;

    if args.list {
        writer.write_record_header()?;
        for (_, group) in report::group_by_state(&output.records) {
            for record in group.into_iter().filter(|r| args.filter.matches(r)) {
                writer.write_record_row(record)?;
            }
        }
        writer.write_record_footer()?;
    }

    writer.write_extraction_problems(&output.unresolved, &output.orphans)?;

    if let Some(ref name) = args.show {
        match output.find(name.trim()) {
            Some(record) => {
                writeln!(lock)?;
                let mut view = TableWriter::new(&mut lock, use_colors);
                if args.raw {
                    view.write_raw_body(record)?;
                } else {
                    view.write_side_by_side(record)?;
                }
            }
            None => ui::print_warning(&format!("No test case named '{}' in {}", name, config.input.display())),
        }
    }

    Ok(())
}

/// Write JSON, name lists and dumps as requested
fn generate_exports(output: &LoadOutput, args: &cli::CliArgs, config: &RunConfig) {
    if let Some(ref json_path) = args.json {
        match report::export_json_report(json_path, output, &config.input) {
            Ok(_) => println!("JSON report saved to: {}", json_path.display()),
            Err(e) => eprintln!("Warning: Failed to save JSON report: {}", e),
        }
    }

    let name_exports = [
        (args.export_passed, RecordFilter::Passed, "passed", "Identical"),
        (args.export_failed, RecordFilter::FailedOrError, "failed", "Non-identical and error"),
    ];
    for (enabled, filter, suffix, label) in name_exports {
        if !enabled {
            continue;
        }
        let path = config.export_path(suffix, "lst");
        match report::export_names(&path, &output.records, filter) {
            Ok(count) => println!("{} test cases ({}) exported to: {}", label, count, path.display()),
            Err(e) => eprintln!("Warning: Failed to export {} list: {}", suffix, e),
        }
    }

    if let Some(ref dump_dir) = args.dump {
        match report::write_record_dump(dump_dir, &config.export_stem, output) {
            Ok(paths) => {
                for path in paths {
                    println!("Dump written: {}", path.display());
                }
            }
            Err(e) => eprintln!("Warning: Failed to write dump: {}", e),
        }
    }
}
