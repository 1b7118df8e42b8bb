//! Worker pool for running crawl jobs
//!
//! This module handles:
//! - Global concurrency limiting via a semaphore
//! - Spawning jobs onto a `JoinSet` so the coordinator can join them as they
//!   finish
//!
//! A job holds its permit for its whole lifetime (fetch, parse and merge),
//! so at most `max_workers` jobs do work at once however many are queued.

use crate::url::Origin;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use url::Url;

/// One page to fetch and extract
#[derive(Debug, Clone)]
pub struct CrawlJob {
    /// URL as resolved from the link, the one that gets fetched
    pub url: Url,

    /// Normalized form of `url`, the page's visited-set key
    pub key: String,

    /// Origin the page was accepted under
    pub origin: Origin,

    /// Link hops from the seed page
    pub depth: u32,
}

/// Bounded pool of crawl jobs
pub struct WorkerPool<T> {
    /// Global semaphore for limiting concurrent jobs
    semaphore: Arc<Semaphore>,

    /// Jobs submitted but not yet joined
    tasks: JoinSet<T>,

    /// Total jobs ever submitted
    dispatched: usize,
}

impl<T: Send + 'static> WorkerPool<T> {
    pub fn new(max_workers: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_workers.max(1))),
            tasks: JoinSet::new(),
            dispatched: 0,
        }
    }

    /// Queues a job; it starts once a worker permit is free
    pub fn submit<F>(&mut self, job: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let semaphore = Arc::clone(&self.semaphore);
        self.tasks.spawn(async move {
            // The semaphore is never closed, so a failed acquire cannot happen
            let _permit = semaphore.acquire_owned().await.ok();
            job.await
        });
        self.dispatched += 1;
    }

    /// Waits for the next job to finish
    ///
    /// Returns `None` once every submitted job has been joined.
    pub async fn join_next(&mut self) -> Option<Result<T, JoinError>> {
        self.tasks.join_next().await
    }

    /// Jobs submitted but not yet joined
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn dispatched(&self) -> usize {
        self.dispatched
    }
}
