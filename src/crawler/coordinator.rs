//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that coordinates one crawl:
//! - Fetching and extracting the seed page
//! - Filtering discovered links to the seed's origin
//! - Claiming links in the visited set and dispatching jobs to the pool
//! - Joining every job and building the final report

use crate::config::Config;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::parser::parse_html;
use crate::crawler::scheduler::{CrawlJob, WorkerPool};
use crate::extract::InformationExtractor;
use crate::output::{build_report, CrawlStats, Report};
use crate::state::{CrawlState, PageState};
use crate::url::{normalize_url, parse_page_url, Origin};
use crate::ScoutError;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Completed jobs between progress lines
const PROGRESS_INTERVAL: u64 = 10;

/// What a finished job hands back to the coordinator
enum JobOutcome {
    /// Page fetched and extracted; its links are still to be filtered
    Fetched { depth: u32, links: HashSet<String> },
    /// Fetch failed; the page contributed nothing
    Failed,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<InformationExtractor>,
}

impl Coordinator {
    /// Creates a coordinator that fetches over HTTP
    pub fn new(config: Config) -> Result<Self, ScoutError> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Creates a coordinator around any `PageFetcher`
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn PageFetcher>) -> Self {
        let extractor = InformationExtractor::from_config(&config.extraction);
        Self {
            config: Arc::new(config),
            fetcher,
            extractor: Arc::new(extractor),
        }
    }

    /// Crawls `seed` and its same-origin links, then builds the report
    ///
    /// The only error after the seed URL parses is
    /// `ScoutError::SeedUnreachable`; failures on other pages are logged,
    /// counted in the report's stats and otherwise ignored.
    pub async fn crawl(&self, seed: &str) -> Result<Report, ScoutError> {
        let started_at = Utc::now();
        let start_time = Instant::now();

        let seed_url = parse_page_url(seed)?;
        let seed_key = normalize_url(seed_url.as_str())?;
        let origin = Origin::of(&seed_url)?;
        tracing::info!("Starting crawl of {} (origin {})", seed_url, origin);

        let seed_page = match self.fetcher.fetch(&seed_url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!("Unable to load seed page {}: {}", seed_url, e);
                return Err(ScoutError::SeedUnreachable {
                    url: seed_url.to_string(),
                    source: e,
                });
            }
        };

        let state = Arc::new(CrawlState::new(
            self.config.extraction.max_mission_sentences,
        ));
        let mut stats = CrawlStats::new(seed_url.as_str(), started_at);

        state.visited.mark_seed(seed_key.as_str())?;
        if let Ok(final_key) = normalize_url(seed_page.final_url.as_str()) {
            if final_key != seed_key {
                tracing::debug!("Seed redirected to {}", seed_page.final_url);
                state.visited.mark_seed(final_key.as_str())?;
            }
        }
        stats.pages_fetched += 1;

        let parsed = parse_html(&seed_page.body, &seed_page.final_url);
        state.absorb(self.extractor.extract(&parsed.text));

        let mut pool = WorkerPool::new(self.config.crawler.max_concurrent_fetches as usize);
        self.dispatch_links(&mut pool, &state, &origin, parsed.links, 1, &mut stats);

        let mut completed: u64 = 0;
        while let Some(joined) = pool.join_next().await {
            completed += 1;

            match joined {
                Ok(JobOutcome::Fetched { depth, links }) => {
                    stats.pages_fetched += 1;
                    if depth < self.config.crawler.max_depth {
                        self.dispatch_links(&mut pool, &state, &origin, links, depth + 1, &mut stats);
                    }
                }
                Ok(JobOutcome::Failed) => stats.pages_failed += 1,
                Err(e) => {
                    tracing::error!("Crawl job panicked: {}", e);
                    stats.pages_failed += 1;
                }
            }

            if completed % PROGRESS_INTERVAL == 0 {
                let rate = completed as f64 / start_time.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {} of {} jobs completed, {} pending, {:.2} pages/sec",
                    completed,
                    pool.dispatched(),
                    pool.pending(),
                    rate
                );
            }
        }

        stats.finish(Utc::now());
        tracing::info!(
            "Crawl completed: {} pages fetched, {} failed in {:?}",
            stats.pages_fetched,
            stats.pages_failed,
            start_time.elapsed()
        );

        Ok(build_report(&state, &self.config.extraction, stats))
    }

    /// Filters links to the origin, claims the new ones and submits a job
    /// for each claim won
    fn dispatch_links(
        &self,
        pool: &mut WorkerPool<JobOutcome>,
        state: &Arc<CrawlState>,
        origin: &Origin,
        links: HashSet<String>,
        depth: u32,
        stats: &mut CrawlStats,
    ) {
        let mut links: Vec<String> = links.into_iter().collect();
        links.sort_unstable();

        for link in links {
            let (url, key) = match parse_page_url(&link).and_then(|url| {
                let key = normalize_url(url.as_str())?;
                Ok((url, key))
            }) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::debug!("Failed to normalize URL {}: {}", link, e);
                    stats.links_skipped += 1;
                    continue;
                }
            };

            if !origin.contains(&url) {
                tracing::debug!("Skipping off-site link {}", url);
                stats.links_skipped += 1;
                continue;
            }

            if !state.visited.claim(key.as_str()) {
                tracing::trace!("Already claimed: {}", key);
                continue;
            }

            let job = CrawlJob {
                url,
                key: key.into(),
                origin: origin.clone(),
                depth,
            };
            pool.submit(run_job(
                job,
                Arc::clone(&self.fetcher),
                Arc::clone(&self.extractor),
                Arc::clone(state),
            ));
            stats.jobs_dispatched += 1;
        }
    }
}

/// Fetches one claimed page, merges its facts and finishes its claim
async fn run_job(
    job: CrawlJob,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<InformationExtractor>,
    state: Arc<CrawlState>,
) -> JobOutcome {
    tracing::debug!(
        "Fetching {} (depth {}, origin {})",
        job.url,
        job.depth,
        job.origin
    );

    match fetcher.fetch(&job.url).await {
        Ok(page) => {
            let parsed = parse_html(&page.body, &page.final_url);
            state.absorb(extractor.extract(&parsed.text));
            finish_claim(&state, &job, PageState::Visited);

            JobOutcome::Fetched {
                depth: job.depth,
                links: parsed.links,
            }
        }
        Err(e) => {
            tracing::warn!("Skipping {}: {}", job.url, e);
            finish_claim(&state, &job, PageState::Failed);
            JobOutcome::Failed
        }
    }
}

fn finish_claim(state: &CrawlState, job: &CrawlJob, to: PageState) {
    if let Err(e) = state.visited.finish(&job.key, to) {
        tracing::warn!("{}", e);
    }
}

/// Runs the main crawl operation
///
/// # Example
///
/// ```no_run
/// use cause_scout::config::Config;
/// use cause_scout::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_crawl(Config::default(), "https://example.org").await?;
/// println!("{:?}", report.primary_cause);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config, seed: &str) -> Result<Report, ScoutError> {
    let coordinator = Coordinator::new(config)?;
    coordinator.crawl(seed).await
}
