// crates/cli/src/presentation.rs
use crate::args::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use dirtree_engine::{DirStats, ScanReport, format_size, scan, write_tree};
use serde::Serialize;
use std::fs;
use std::io::Write;

/// Analyze the configured root: tree drawing first, then an independent
/// stats pass over the same subtree.
///
/// A missing root is a reported condition, not a failure. Tree-drawing
/// errors propagate to the caller; per-entry scan errors only produce
/// stderr diagnostics.
pub fn run(config: &Config) -> Result<()> {
    // Checked without following symlinks, same as the traversals.
    if fs::symlink_metadata(&config.root).is_err() {
        println!("Path does not exist: {}", config.root.display());
        return Ok(());
    }

    match config.format {
        OutputFormat::Table => print_table(config),
        OutputFormat::Json => print_json(config),
    }
}

fn print_table(config: &Config) -> Result<()> {
    println!();
    println!("Directory Tree for: {}", config.root.display());
    println!();

    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_tree(&mut out, &config.root)?;
        out.flush()?;
    }

    let report = scan(&config.root);
    print_access_errors(&report);

    println!();
    println!("Directory Statistics:");
    println!("Total Directories: {}", report.stats.dirs);
    println!("Total Files: {}", report.stats.files);
    println!("Total Size: {}", format_size(report.stats.total_size));
    println!();

    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonSummary {
    root: String,
    directories: u64,
    files: u64,
    total_size_bytes: u64,
    total_size: String,
}

fn print_json(config: &Config) -> Result<()> {
    let report = scan(&config.root);
    print_access_errors(&report);

    let DirStats {
        files,
        dirs,
        total_size,
    } = report.stats;
    let summary = JsonSummary {
        root: config.root.display().to_string(),
        directories: dirs,
        files,
        total_size_bytes: total_size,
        total_size: format_size(total_size),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn print_access_errors(report: &ScanReport) {
    for (path, err) in &report.errors {
        eprintln!("Error accessing {}: {err}", path.display());
    }
}
