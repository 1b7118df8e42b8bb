//! Cause-Scout main entry point
//!
//! This is the command-line interface for the Cause-Scout site crawler.

use anyhow::Context;
use cause_scout::config::{load_config_with_hash, validate, Config};
use cause_scout::crawler::crawl_to_csv;
use cause_scout::output::print_statistics;
use cause_scout::url::{normalize_url, Origin};
use cause_scout::ScoutError;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Cause-Scout: find out what a website is about
///
/// Cause-Scout crawls a website's home page and the same-site pages it links
/// to, collects contact emails, phone numbers and mission statements,
/// classifies the organization's cause and writes everything to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "cause-scout")]
#[command(version = "1.0.0")]
#[command(about = "Extract contacts, mission statements and causes from a website", long_about = None)]
struct Cli {
    /// Website to crawl (prompted for when omitted)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Where to write the CSV report (overrides output.csv-path)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(output) = &cli.output {
        config.output.csv_path = output.display().to_string();
        validate(&config)?;
    }

    let seed = match cli.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    if cli.dry_run {
        handle_dry_run(&config, &seed)?;
    } else {
        handle_crawl(config, &seed).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("cause_scout=info,warn"),
            1 => EnvFilter::new("cause_scout=debug,info"),
            2 => EnvFilter::new("cause_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Asks for the seed URL on stdin
fn prompt_for_url() -> anyhow::Result<String> {
    print!("Enter the website URL: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read URL from stdin")?;

    let url = line.trim();
    if url.is_empty() {
        anyhow::bail!("No URL given");
    }
    Ok(url.to_string())
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config, seed: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Cause-Scout Dry Run ===\n");

    let seed_url = normalize_url(seed)?;
    let origin = Origin::of(&seed_url)?;

    println!("Seed:");
    println!("  URL: {}", seed_url);
    println!("  Origin: {}", origin);

    println!("\nCrawler Configuration:");
    println!(
        "  Max concurrent fetches: {}",
        config.crawler.max_concurrent_fetches
    );
    println!("  Request timeout: {}s", config.crawler.request_timeout_secs);
    println!("  Max depth: {}", config.crawler.max_depth);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.user_agent);

    println!("\nExtraction:");
    println!(
        "  Sentence length: {}..={}",
        config.extraction.min_sentence_length, config.extraction.max_sentence_length
    );
    println!(
        "  Caps: {} emails, {} phones, {} mission sentences",
        config.extraction.max_emails,
        config.extraction.max_phones,
        config.extraction.max_mission_sentences
    );
    println!(
        "  Blacklisted phrases ({}):",
        config.extraction.blacklist.len()
    );
    for phrase in &config.extraction.blacklist {
        println!("    - {}", phrase);
    }

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
    println!("✓ Would crawl {} and its links on {}", seed_url, origin);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config, seed: &str) -> Result<(), Box<dyn std::error::Error>> {
    let csv_path = config.output.csv_path.clone();

    match crawl_to_csv(config, seed).await {
        Ok(report) => {
            print_statistics(&report.stats);
            println!("✓ Data saved to {}", csv_path);
            Ok(())
        }
        Err(e) => {
            if let ScoutError::SeedUnreachable { url, .. } = &e {
                eprintln!("✗ Failed to retrieve {}. No report was written.", url);
            } else {
                tracing::error!("Crawl failed: {}", e);
            }
            Err(e.into())
        }
    }
}
