use serde::Deserialize;

/// Browser user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Phrases that mark a text span as navigation chrome rather than content
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "learn more",
    "read more",
    "current coalitions",
    "details",
    "overview",
    "404",
    "page not found",
    "error",
    "not available",
];

/// Main configuration structure for Cause-Scout
///
/// Every section is optional in the TOML file; missing values fall back to
/// the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    pub extraction: ExtractionConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of concurrent page fetches
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: u32,

    /// Timeout for a single GET request (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// How many links away from the seed to follow (1 = the seed's own links)
    #[serde(rename = "max-depth")]
    pub max_depth: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: 10,
            request_timeout_secs: 10,
            max_depth: 1,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV report
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "website_information.csv".to_string(),
        }
    }
}

/// Text extraction and report limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Shortest accepted sentence (characters, after trimming)
    #[serde(rename = "min-sentence-length")]
    pub min_sentence_length: usize,

    /// Longest accepted sentence (characters, after trimming)
    #[serde(rename = "max-sentence-length")]
    pub max_sentence_length: usize,

    /// Mission sentences kept across the whole crawl
    #[serde(rename = "max-mission-sentences")]
    pub max_mission_sentences: usize,

    /// Emails written to the report
    #[serde(rename = "max-emails")]
    pub max_emails: usize,

    /// Phone numbers written to the report
    #[serde(rename = "max-phones")]
    pub max_phones: usize,

    /// Case-insensitive phrases that disqualify a sentence
    pub blacklist: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_sentence_length: 10,
            max_sentence_length: 200,
            max_mission_sentences: 3,
            max_emails: 3,
            max_phones: 3,
            blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}
