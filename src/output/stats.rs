//! Statistics for a single crawl
//!
//! This module provides the counters the coordinator keeps while a crawl
//! runs, and the stdout summary printed when it finishes.

use chrono::{DateTime, Utc};

/// Crawl statistics summary
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlStats {
    /// Normalized seed URL
    pub seed_url: String,

    /// Jobs handed to the worker pool (the seed is not a job)
    pub jobs_dispatched: u64,

    /// Pages fetched successfully, seed included
    pub pages_fetched: u64,

    /// Jobs whose fetch failed or whose task panicked
    pub pages_failed: u64,

    /// Discovered links dropped before claiming (malformed or cross-origin)
    pub links_skipped: u64,

    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl CrawlStats {
    pub fn new(seed_url: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            seed_url: seed_url.into(),
            jobs_dispatched: 0,
            pages_fetched: 0,
            pages_failed: 0,
            links_skipped: 0,
            started_at,
            finished_at: None,
        }
    }

    pub fn finish(&mut self, finished_at: DateTime<Utc>) {
        self.finished_at = Some(finished_at);
    }

    /// Wall-clock duration, if the crawl has finished
    pub fn duration_seconds(&self) -> Option<f64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds() as f64 / 1000.0)
    }

    /// Pages attempted, seed included
    pub fn pages_attempted(&self) -> u64 {
        self.pages_fetched + self.pages_failed
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.pages_attempted();
        if attempted == 0 {
            return 0.0;
        }
        (self.pages_fetched as f64 / attempted as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStats) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Seed: {}", stats.seed_url);
    println!("  Jobs dispatched: {}", stats.jobs_dispatched);
    println!("  Pages fetched: {}", stats.pages_fetched);
    println!("  Pages failed: {}", stats.pages_failed);
    println!("  Links skipped: {}", stats.links_skipped);
    println!();

    println!("Success rate: {:.1}%", stats.success_rate());
    if let Some(duration) = stats.duration_seconds() {
        println!("Duration: {:.2}s", duration);
    }
    println!();
}
