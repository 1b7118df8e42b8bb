//! Aggregation state shared by all jobs of one crawl

use crate::extract::{CauseTally, PageFacts};
use crate::state::{lock, VisitedSet};
use std::collections::HashSet;
use std::sync::Mutex;

/// Emails and phone numbers collected so far
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    pub emails: HashSet<String>,
    pub phones: HashSet<String>,
}

/// Mission sentences in discovery order, never longer than its cap
#[derive(Debug, Clone)]
pub struct MissionSentenceList {
    sentences: Vec<String>,
    cap: usize,
}

impl MissionSentenceList {
    pub fn new(cap: usize) -> Self {
        Self {
            sentences: Vec::with_capacity(cap),
            cap,
        }
    }

    /// Appends sentences in order until the cap is reached, returning how
    /// many were taken
    pub fn extend_capped<I>(&mut self, sentences: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut taken = 0;
        for sentence in sentences {
            if self.is_full() {
                break;
            }
            self.sentences.push(sentence);
            taken += 1;
        }
        taken
    }

    pub fn is_full(&self) -> bool {
        self.sentences.len() >= self.cap
    }

    pub fn as_slice(&self) -> &[String] {
        &self.sentences
    }
}

/// Everything the jobs of one crawl write to
///
/// Each container sits behind its own lock and every mutation happens in a
/// single critical section. Read it into a report only after all jobs have
/// been joined.
#[derive(Debug)]
pub struct CrawlState {
    pub visited: VisitedSet,
    contacts: Mutex<ContactStore>,
    mission_sentences: Mutex<MissionSentenceList>,
    tally: Mutex<CauseTally>,
}

impl CrawlState {
    pub fn new(max_mission_sentences: usize) -> Self {
        Self {
            visited: VisitedSet::new(),
            contacts: Mutex::new(ContactStore::default()),
            mission_sentences: Mutex::new(MissionSentenceList::new(max_mission_sentences)),
            tally: Mutex::new(CauseTally::new()),
        }
    }

    /// Merges one page's facts into the shared state
    pub fn absorb(&self, facts: PageFacts) {
        if facts.is_empty() {
            tracing::trace!("Page had nothing to extract");
            return;
        }

        let PageFacts {
            emails,
            phones,
            mission_sentences,
            tally,
        } = facts;

        {
            let mut contacts = lock(&self.contacts);
            contacts.emails.extend(emails);
            contacts.phones.extend(phones);
        }

        if !mission_sentences.is_empty() {
            let taken = lock(&self.mission_sentences).extend_capped(mission_sentences);
            tracing::trace!("Kept {} mission sentences from page", taken);
        }

        lock(&self.tally).merge(&tally);
    }

    pub fn contacts(&self) -> ContactStore {
        lock(&self.contacts).clone()
    }

    pub fn mission_sentences(&self) -> Vec<String> {
        lock(&self.mission_sentences).as_slice().to_vec()
    }

    pub fn tally(&self) -> CauseTally {
        lock(&self.tally).clone()
    }
}
