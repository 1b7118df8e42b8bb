//! Information extraction from page text
//!
//! This module turns the plain-text view of a page into `PageFacts`:
//! - Email addresses and phone numbers
//! - Mission statement sentences
//! - Per-cause keyword counts
//!
//! Extraction is pure. The coordinator merges each page's facts into the
//! shared crawl state in one step (see `state::CrawlState::absorb`).

mod cause;
mod contacts;
mod mission;
mod sentence;

pub use cause::{classify_sentence, Cause, CauseTally};
pub use contacts::{
    extract_emails, extract_phones, find_email_candidates, find_phone_candidates, is_valid_email,
    is_valid_phone,
};
pub use mission::{find_mission_candidates, mission_sentences};
pub use sentence::SentenceFilter;

use crate::config::ExtractionConfig;

/// Everything extracted from a single page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFacts {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    /// Valid mission sentences, shortest first
    pub mission_sentences: Vec<String>,
    pub tally: CauseTally,
}

impl PageFacts {
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
            && self.phones.is_empty()
            && self.mission_sentences.is_empty()
            && self.tally.is_empty()
    }
}

/// Extracts contacts, mission sentences and cause counts from page text
#[derive(Debug, Clone, Default)]
pub struct InformationExtractor {
    filter: SentenceFilter,
}

impl InformationExtractor {
    pub fn new(filter: SentenceFilter) -> Self {
        Self { filter }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(SentenceFilter::from_config(config))
    }

    /// Runs every extractor over `text`
    ///
    /// Cause counting works on coarse sentences split at '.', each of which
    /// has to pass the sentence filter first.
    pub fn extract(&self, text: &str) -> PageFacts {
        let mut tally = CauseTally::new();
        for sentence in text.split('.') {
            if self.filter.is_valid(sentence) {
                classify_sentence(sentence, &mut tally);
            }
        }

        PageFacts {
            emails: extract_emails(text),
            phones: extract_phones(text),
            mission_sentences: mission_sentences(text, &self.filter),
            tally,
        }
    }
}
