//! Output formatting and persistence for aggregation reports.
//!
//! Supports the plain text report and a JSON export.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::analyzers::types::Report;

const BANNER_WIDTH: usize = 50;

/// Renders every section as a bannered block of `label: value` lines.
pub fn render_report<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);

    for (_, section) in report.iter() {
        writeln!(out, "{banner}")?;
        writeln!(out, "{}", section.title())?;
        writeln!(out, "{banner}")?;
        for (label, value) in section.iter() {
            writeln!(out, "{label}: {value}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Writes the text report to `path`, replacing any existing file.
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    debug!(path = %path.display(), sections = report.len(), "Writing text report");

    let file = File::create(path)
        .with_context(|| format!("failed to create report {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    render_report(&mut writer, report)?;
    writer.flush()?;

    Ok(())
}

/// Writes the report as pretty-printed JSON to `path`.
pub fn write_json(path: &Path, report: &Report) -> Result<()> {
    debug!(path = %path.display(), "Writing JSON report");

    let file = File::create(path)
        .with_context(|| format!("failed to create JSON report {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
