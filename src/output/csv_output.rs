//! CSV report writer

use crate::output::{OutputResult, Report, ReportWriter};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header row of every report
pub const CSV_HEADER: [&str; 3] = ["Type", "Category", "Content"];

/// Writes a report as `Type,Category,Content` rows to a file
#[derive(Debug, Clone)]
pub struct CsvReportWriter {
    path: PathBuf,
}

impl CsvReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for CsvReportWriter {
    /// Creates (or truncates) the file and writes the whole report
    fn write_report(&self, report: &Report) -> OutputResult<()> {
        let file = File::create(&self.path)?;
        write_csv(file, report)?;
        tracing::info!("Wrote report to {}", self.path.display());
        Ok(())
    }
}

/// Writes the header and every report row to `writer`
pub fn write_csv<W: Write>(writer: W, report: &Report) -> OutputResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;

    for row in report.rows() {
        csv.write_record([
            row.row_type.label(),
            row.category.as_str(),
            row.content.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
