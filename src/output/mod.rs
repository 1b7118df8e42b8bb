//! Output module for reports and crawl statistics
//!
//! This module handles:
//! - Building the final report from the shared crawl state
//! - Writing it as CSV
//! - Printing crawl statistics

mod csv_output;
mod report;
pub mod stats;
mod traits;

pub use csv_output::{write_csv, CsvReportWriter, CSV_HEADER};
pub use report::{build_report, Report, ReportRow, RowType, NOT_APPLICABLE, NO_CAUSE};
pub use stats::{print_statistics, CrawlStats};
pub use traits::{OutputError, OutputResult, ReportWriter};
