// src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use std::io::Write;
use wildsweep_usecase::RunReport;

pub fn print_report(report: &RunReport, format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format)?;
    out.flush()?;
    Ok(())
}

pub fn write_report(out: &mut impl Write, report: &RunReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, report),
        OutputFormat::Json => write_json(out, report),
    }
}

fn write_text(out: &mut impl Write, report: &RunReport) -> Result<()> {
    for path in &report.deleted {
        writeln!(out, "deleted {path}")?;
    }
    for failure in &report.failures {
        writeln!(out, "failed {}: {}", failure.path, failure.reason)?;
    }
    writeln!(
        out,
        "{} file(s) deleted, {} failure(s), {} directories scanned",
        report.files_deleted, report.deletion_failures, report.directories_visited
    )?;
    Ok(())
}

fn write_json(out: &mut impl Write, report: &RunReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
