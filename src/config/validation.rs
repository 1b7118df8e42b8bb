use crate::config::types::{Config, CrawlerConfig, ExtractionConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_extraction_config(&config.extraction)?;
    Ok(())
}

fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_fetches must be between 1 and 100, got {}",
            config.max_concurrent_fetches
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "max_depth must be >= 1, got {}",
            config.max_depth
        )));
    }

    Ok(())
}

fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_extraction_config(config: &ExtractionConfig) -> Result<(), ConfigError> {
    if config.min_sentence_length >= config.max_sentence_length {
        return Err(ConfigError::Validation(format!(
            "min_sentence_length ({}) must be less than max_sentence_length ({})",
            config.min_sentence_length, config.max_sentence_length
        )));
    }

    for (name, value) in [
        ("max_mission_sentences", config.max_mission_sentences),
        ("max_emails", config.max_emails),
        ("max_phones", config.max_phones),
    ] {
        if value < 1 {
            return Err(ConfigError::Validation(format!(
                "{} must be >= 1, got {}",
                name, value
            )));
        }
    }

    if config.blacklist.iter().any(|phrase| phrase.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "blacklist phrases cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_concurrency_bounds() {
        let mut config = Config::default();
        config.crawler.max_concurrent_fetches = 0;
        assert!(validate(&config).is_err());

        config.crawler.max_concurrent_fetches = 101;
        assert!(validate(&config).is_err());

        config.crawler.max_concurrent_fetches = 100;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.crawler.request_timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let mut config = Config::default();
        config.crawler.max_depth = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let mut config = Config::default();
        config.user_agent.user_agent = "   ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_csv_path_rejected() {
        let mut config = Config::default();
        config.output.csv_path = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_sentence_bounds_must_be_ordered() {
        let mut config = Config::default();
        config.extraction.min_sentence_length = 200;
        config.extraction.max_sentence_length = 200;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_caps_rejected() {
        let mut config = Config::default();
        config.extraction.max_phones = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("max_phones"));
    }

    #[test]
    fn test_blank_blacklist_phrase_rejected() {
        let mut config = Config::default();
        config.extraction.blacklist.push(" ".to_string());
        assert!(validate(&config).is_err());
    }
}
