//! Email and phone number detection
//!
//! Detection is split into a candidate scan and a validity check so both
//! halves can be exercised on literal strings.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:\+?\d{1,3})?[-.\s]?(?:\(?\d{1,4}\)?[-.\s]?)?\d{1,4}[-.\s]?\d{1,4}[-.\s]?\d{1,9}\b",
    )
    .expect("valid phone regex")
});

/// Characters that disqualify an email candidate
///
/// Any address with a digit zero or an underscore is dropped too, real ones
/// included.
const EMAIL_NOISE: &[char] = &['?', '0', '_'];

/// Shortest phone number once hyphens and spaces are removed
const MIN_PHONE_LENGTH: usize = 7;

/// Every email-shaped span in `text`, in order of appearance
pub fn find_email_candidates(text: &str) -> Vec<&str> {
    EMAIL_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn is_valid_email(candidate: &str) -> bool {
    !candidate.contains(EMAIL_NOISE)
}

/// Every phone-shaped span in `text`, in order of appearance
pub fn find_phone_candidates(text: &str) -> Vec<&str> {
    PHONE_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// A phone candidate must start with a digit and keep at least seven
/// characters after hyphens and spaces are stripped
///
/// Any Unicode digit counts, the same set `\d` matches in the pattern.
pub fn is_valid_phone(candidate: &str) -> bool {
    let starts_with_digit = candidate.chars().next().is_some_and(char::is_numeric);

    let compact_length = candidate
        .chars()
        .filter(|&c| c != '-' && c != ' ')
        .count();

    starts_with_digit && compact_length >= MIN_PHONE_LENGTH
}

/// Valid emails found in `text`
pub fn extract_emails(text: &str) -> Vec<String> {
    find_email_candidates(text)
        .into_iter()
        .filter(|candidate| is_valid_email(candidate))
        .map(str::to_string)
        .collect()
}

/// Valid phone numbers found in `text`
pub fn extract_phones(text: &str) -> Vec<String> {
    find_phone_candidates(text)
        .into_iter()
        .filter(|candidate| is_valid_phone(candidate))
        .map(str::to_string)
        .collect()
}
