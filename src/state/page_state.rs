//! Page state definitions for tracking crawl progress
//!
//! A URL that is not in the visited set is implicitly unvisited; once
//! claimed it moves through these states and never leaves the set.

use std::fmt;

/// Represents the current state of a page in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// Page has been claimed by a job and is being fetched or extracted
    InFlight,

    // ===== Terminal States =====
    /// Page was fetched and its information extracted
    Visited,

    /// Page fetch failed (transport error, timeout or non-2xx status)
    Failed,
}

impl PageState {
    /// Returns true if a page may move from `from` to `to`
    ///
    /// `None` stands for an unvisited page. Claiming (`None -> InFlight`) and
    /// finishing (`InFlight -> Visited | Failed`) are the only legal moves;
    /// the seed goes straight from `None` to `Visited`.
    pub fn can_transition(from: Option<PageState>, to: PageState) -> bool {
        matches!(
            (from, to),
            (None, Self::InFlight)
                | (None, Self::Visited)
                | (Some(Self::InFlight), Self::Visited)
                | (Some(Self::InFlight), Self::Failed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InFlight => "in_flight",
            Self::Visited => "visited",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
