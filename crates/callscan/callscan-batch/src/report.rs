//! Report writers: delimited text and JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use callscan_core::config::ReportFormat;
use callscan_core::errors::BatchError;
use callscan_core::models::BatchReport;

const CSV_HEADER: &str = "call_id,non_compliant_utterances";

/// Write rows as CSV. The utterance list is stored in one cell as a JSON
/// array string. Skipped records are not part of the table.
pub fn write_csv<W: Write>(report: &BatchReport, mut out: W) -> std::io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for row in &report.rows {
        let list = serde_json::to_string(&row.non_compliant_utterances)?;
        writeln!(out, "{},{}", csv_field(&row.call_id), csv_field(&list))?;
    }
    out.flush()
}

/// Write the full report, skipped records included, as pretty JSON.
pub fn write_json<W: Write>(report: &BatchReport, mut out: W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()
}

pub fn write_report<W: Write>(
    report: &BatchReport,
    format: ReportFormat,
    out: W,
) -> std::io::Result<()> {
    match format {
        ReportFormat::Csv => write_csv(report, out),
        ReportFormat::Json => write_json(report, out),
    }
}

/// Write the report to `path`, replacing any existing file.
pub fn save_report(report: &BatchReport, format: ReportFormat, path: &Path) -> Result<(), BatchError> {
    let to_output_error = |e: std::io::Error| BatchError::Output {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    let file = File::create(path).map_err(to_output_error)?;
    write_report(report, format, BufWriter::new(file)).map_err(to_output_error)?;
    tracing::info!(path = %path.display(), format = format.as_str(), "report written");
    Ok(())
}

/// Quote a field when it contains a delimiter, quote, or line break.
/// Embedded quotes are doubled.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
