//! State module for tracking crawl progress
//!
//! This module provides the state shared by the jobs of a single crawl.
//!
//! # Components
//!
//! - `PageState`: Tracks the state of individual pages (in flight, visited, failed)
//! - `VisitedSet`: Claims URLs so each is fetched at most once
//! - `CrawlState`: Contacts, mission sentences and cause counts gathered so far

mod crawl_state;
mod page_state;
mod visited;

pub use crawl_state::{ContactStore, CrawlState, MissionSentenceList};
pub use page_state::PageState;
pub use visited::VisitedSet;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks a mutex, carrying on with the data if a job panicked while holding it
///
/// Every critical section leaves its container consistent, so a poisoned
/// lock still guards usable data.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
