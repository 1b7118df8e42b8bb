//! Plausibility check for sentences pulled out of page text

use crate::config::ExtractionConfig;

/// Decides whether a text span is a usable sentence
///
/// A span is rejected when its trimmed length (in characters) falls outside
/// `[min_length, max_length]` or when it contains a blacklisted phrase,
/// compared case-insensitively.
#[derive(Debug, Clone)]
pub struct SentenceFilter {
    min_length: usize,
    max_length: usize,
    /// Lowercased once at construction
    blacklist: Vec<String>,
}

impl SentenceFilter {
    pub fn new<I, S>(min_length: usize, max_length: usize, blacklist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            min_length,
            max_length,
            blacklist: blacklist
                .into_iter()
                .map(|phrase| phrase.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(
            config.min_sentence_length,
            config.max_sentence_length,
            &config.blacklist,
        )
    }

    pub fn is_valid(&self, sentence: &str) -> bool {
        let length = sentence.trim().chars().count();
        if length < self.min_length || length > self.max_length {
            return false;
        }

        let lowered = sentence.to_lowercase();
        !self
            .blacklist
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str()))
    }
}

impl Default for SentenceFilter {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}
