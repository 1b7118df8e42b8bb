//! Mission statement detection

use crate::extract::sentence::SentenceFilter;
use once_cell::sync::Lazy;
use regex::Regex;

static MISSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[^.!?]*\bmission\b[^.!?]*[.!?]").expect("valid mission regex"));

/// Every clause containing the word "mission", up to and including its
/// terminal punctuation
pub fn find_mission_candidates(text: &str) -> Vec<&str> {
    MISSION_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Valid mission sentences of one page, trimmed and shortest first
pub fn mission_sentences(text: &str, filter: &SentenceFilter) -> Vec<String> {
    let mut sentences: Vec<String> = find_mission_candidates(text)
        .into_iter()
        .filter(|candidate| filter.is_valid(candidate))
        .map(|candidate| candidate.trim().to_string())
        .collect();

    sentences.sort_by_key(|sentence| sentence.chars().count());
    sentences
}
