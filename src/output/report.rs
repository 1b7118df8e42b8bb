//! Final report built from the shared crawl state

use crate::config::ExtractionConfig;
use crate::extract::Cause;
use crate::output::CrawlStats;
use crate::state::CrawlState;
use std::fmt;

/// Label written in place of a missing cause
pub const NO_CAUSE: &str = "None";

/// Category column of mission sentence rows
pub const NOT_APPLICABLE: &str = "N/A";

/// The `Type` column of a report row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowType {
    Contact,
    MainCause,
    SecondaryCause,
    MissionSentence,
}

impl RowType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::MainCause => "Main Cause",
            Self::SecondaryCause => "Secondary Cause",
            Self::MissionSentence => "Mission Sentence",
        }
    }
}

impl fmt::Display for RowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One `Type,Category,Content` row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub row_type: RowType,
    pub category: String,
    pub content: String,
}

impl ReportRow {
    fn new(row_type: RowType, category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            row_type,
            category: category.into(),
            content: content.into(),
        }
    }
}

/// Immutable snapshot of everything a crawl found
#[derive(Debug, Clone)]
pub struct Report {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub primary_cause: Option<Cause>,
    pub secondary_cause: Option<Cause>,
    pub mission_sentences: Vec<String>,
    pub stats: CrawlStats,
}

impl Report {
    /// Report rows in output order: emails, phones, main cause, secondary
    /// cause, mission sentences
    pub fn rows(&self) -> Vec<ReportRow> {
        let mut rows =
            Vec::with_capacity(self.emails.len() + self.phones.len() + self.mission_sentences.len() + 2);

        for email in &self.emails {
            rows.push(ReportRow::new(RowType::Contact, "Email", email.as_str()));
        }
        for phone in &self.phones {
            rows.push(ReportRow::new(RowType::Contact, "Phone", phone.as_str()));
        }

        rows.push(ReportRow::new(
            RowType::MainCause,
            cause_label(self.primary_cause),
            "",
        ));
        rows.push(ReportRow::new(
            RowType::SecondaryCause,
            cause_label(self.secondary_cause),
            "",
        ));

        for sentence in &self.mission_sentences {
            rows.push(ReportRow::new(
                RowType::MissionSentence,
                NOT_APPLICABLE,
                sentence.as_str(),
            ));
        }

        rows
    }
}

fn cause_label(cause: Option<Cause>) -> &'static str {
    cause.map_or(NO_CAUSE, |c| c.name())
}

/// Builds the report once every job has been joined
///
/// Emails and phones are truncated to their caps in set iteration order, so
/// which ones survive on a site with many contacts is unspecified.
pub fn build_report(state: &CrawlState, config: &ExtractionConfig, stats: CrawlStats) -> Report {
    let contacts = state.contacts();
    let (primary_cause, secondary_cause) = state.tally().main_and_secondary();

    let emails: Vec<String> = contacts.emails.into_iter().take(config.max_emails).collect();
    let phones: Vec<String> = contacts.phones.into_iter().take(config.max_phones).collect();

    tracing::debug!(
        "Built report: {} emails, {} phones, primary cause {}",
        emails.len(),
        phones.len(),
        cause_label(primary_cause)
    );

    Report {
        emails,
        phones,
        primary_cause,
        secondary_cause,
        mission_sentences: state.mission_sentences(),
        stats,
    }
}
