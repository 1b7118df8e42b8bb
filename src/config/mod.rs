//! Configuration module for Cause-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. A config file is optional; `Config::default()` describes a crawl
//! with ten workers, a ten second timeout and the seed's direct links only.
//!
//! # Example
//!
//! ```no_run
//! use cause_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Report goes to: {}", config.output.csv_path);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{
    Config, CrawlerConfig, ExtractionConfig, OutputConfig, UserAgentConfig, DEFAULT_BLACKLIST,
    DEFAULT_USER_AGENT,
};

pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
