//! Visited set shared by every job of a crawl

use crate::state::{lock, PageState};
use crate::ScoutError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Normalized URLs that have been claimed, with their current state
///
/// Membership only grows. The claim is a single test-and-insert under the
/// lock, which is what keeps a URL from being fetched twice when several
/// pages link to it.
#[derive(Debug, Default)]
pub struct VisitedSet {
    pages: Mutex<HashMap<String, PageState>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims an unvisited URL for fetching
    ///
    /// Returns false without changing anything if the URL is already known,
    /// whatever its state.
    pub fn claim(&self, url: &str) -> bool {
        let mut pages = lock(&self.pages);
        if pages.contains_key(url) {
            return false;
        }
        pages.insert(url.to_string(), PageState::InFlight);
        true
    }

    /// Records the seed, which is fetched before anything can be claimed
    pub fn mark_seed(&self, url: &str) -> Result<(), ScoutError> {
        self.transition(url, PageState::Visited)
    }

    /// Finishes a claimed URL as `Visited` or `Failed`
    pub fn finish(&self, url: &str, state: PageState) -> Result<(), ScoutError> {
        self.transition(url, state)
    }

    fn transition(&self, url: &str, to: PageState) -> Result<(), ScoutError> {
        let mut pages = lock(&self.pages);
        let from = pages.get(url).copied();

        if !PageState::can_transition(from, to) {
            return Err(ScoutError::InvalidTransition {
                url: url.to_string(),
                from,
                to,
            });
        }

        pages.insert(url.to_string(), to);
        Ok(())
    }

    pub fn state(&self, url: &str) -> Option<PageState> {
        lock(&self.pages).get(url).copied()
    }

    pub fn contains(&self, url: &str) -> bool {
        lock(&self.pages).contains_key(url)
    }

    pub fn len(&self) -> usize {
        lock(&self.pages).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.pages).is_empty()
    }

    /// Number of URLs currently in `state`
    pub fn count(&self, state: PageState) -> usize {
        lock(&self.pages).values().filter(|&&s| s == state).count()
    }
}
