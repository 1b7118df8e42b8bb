//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `PageFetcher` trait
//! - HTML parsing into links and a text view
//! - A bounded worker pool for crawl jobs
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_url, FetchedPage, HttpFetcher, PageFetcher};
pub use parser::{parse_html, ParsedPage};
pub use scheduler::{CrawlJob, WorkerPool};

use crate::config::Config;
use crate::output::{CsvReportWriter, Report, ReportWriter};
use crate::ScoutError;

/// Crawls one site and writes its CSV report to `output.csv-path`
///
/// The file is only created once the crawl has produced a report, so an
/// unreachable seed leaves no CSV behind.
pub async fn crawl_to_csv(config: Config, seed: &str) -> Result<Report, ScoutError> {
    let writer = CsvReportWriter::new(&config.output.csv_path);
    let report = run_crawl(config, seed).await?;

    writer.write_report(&report)?;
    tracing::info!("Report written to {}", writer.path().display());

    Ok(report)
}
