//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use cause_scout::config::{parse_config, Config};
use cause_scout::crawler::{crawl_to_csv, Coordinator};
use cause_scout::extract::Cause;
use cause_scout::ScoutError;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a GET mock that must be hit exactly `times` times
async fn mount_page(server: &MockServer, page: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}

fn coordinator(config: Config) -> Coordinator {
    Coordinator::new(config).expect("Failed to create coordinator")
}

#[tokio::test]
async fn test_seed_links_dispatch_same_origin_jobs() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><body>
            <a href="{}/about">About</a>
            <a href="/contact">Contact</a>
            <a href="{}/partner">Partner</a>
            </body></html>"#,
            base_url,
            other_server.uri()
        ),
        1,
    )
    .await;
    mount_page(&mock_server, "/about", "<p>About us</p>".to_string(), 1).await;
    mount_page(&mock_server, "/contact", "<p>Contact us</p>".to_string(), 1).await;
    mount_page(&other_server, "/partner", "<p>Partner</p>".to_string(), 0).await;

    let report = coordinator(Config::default())
        .crawl(&base_url)
        .await
        .expect("Crawl failed");

    assert_eq!(report.stats.jobs_dispatched, 2);
    assert_eq!(report.stats.pages_fetched, 3);
    assert_eq!(report.stats.links_skipped, 1);
}

#[tokio::test]
async fn test_unreachable_seed_writes_no_csv() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("website_information.csv");
    let mut config = Config::default();
    config.output.csv_path = csv_path.display().to_string();

    let result = crawl_to_csv(config, &mock_server.uri()).await;

    match result {
        Err(ScoutError::SeedUnreachable { url, .. }) => {
            assert!(url.starts_with(&mock_server.uri()));
        }
        other => panic!("Expected SeedUnreachable, got {:?}", other.map(|r| r.stats)),
    }
    assert!(!csv_path.exists());
}

#[tokio::test]
async fn test_shared_links_fetched_once_at_depth_two() {
    let mock_server = MockServer::start().await;
    let shared = r#"<a href="/shared">Shared</a><a href="/">Home</a><a href="/a#top">A</a>"#;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/b">B</a><a href="/a?utm_source=news">A again</a>"#
            .to_string(),
        1,
    )
    .await;
    mount_page(&mock_server, "/a", shared.to_string(), 1).await;
    mount_page(&mock_server, "/b", shared.to_string(), 1).await;
    mount_page(&mock_server, "/shared", "<p>Shared page</p>".to_string(), 1).await;

    let config = parse_config(
        r#"
        [crawler]
        max-depth = 2
        max-concurrent-fetches = 4
        "#,
    )
    .unwrap();

    let report = coordinator(config)
        .crawl(&mock_server.uri())
        .await
        .expect("Crawl failed");

    assert_eq!(report.stats.jobs_dispatched, 3);
    assert_eq!(report.stats.pages_fetched, 4);
}

#[tokio::test]
async fn test_failing_subpage_does_not_abort_crawl() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/broken">Broken</a><a href="/ok">Ok</a>"#.to_string(),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        "/ok",
        "<p>Reach the team at team@riverkeepers.org any time.</p>".to_string(),
        1,
    )
    .await;

    let report = coordinator(Config::default())
        .crawl(&mock_server.uri())
        .await
        .expect("Crawl failed");

    assert_eq!(report.stats.pages_failed, 1);
    assert_eq!(report.emails, vec!["team@riverkeepers.org".to_string()]);
}

#[tokio::test]
async fn test_redirected_seed_resolves_links_against_final_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/home/"))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        "/home/",
        r#"<a href="team">Team</a><a href="/">Home</a><a href="/home">Home again</a>"#
            .to_string(),
        1,
    )
    .await;
    mount_page(&mock_server, "/home/team", "<p>Our team</p>".to_string(), 1).await;

    let report = coordinator(Config::default())
        .crawl(&mock_server.uri())
        .await
        .expect("Crawl failed");

    assert_eq!(report.stats.jobs_dispatched, 1);
}

#[tokio::test]
async fn test_trailing_slash_page_is_fetched_as_linked() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", r#"<a href="/about/">About</a>"#.to_string(), 1).await;
    mount_page(
        &mock_server,
        "/about/",
        "<p>Reach the board at board@riverkeepers.org any time.</p>".to_string(),
        1,
    )
    .await;

    let report = coordinator(Config::default())
        .crawl(&mock_server.uri())
        .await
        .expect("Crawl failed");

    assert_eq!(report.stats.pages_failed, 0);
    assert_eq!(report.stats.pages_fetched, 2);
    assert_eq!(report.emails, vec!["board@riverkeepers.org".to_string()]);
}

#[tokio::test]
async fn test_end_to_end_csv_report() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html>
        <head><style>p { color: green; }</style></head>
        <body>
            <h1>Clean Rivers</h1>
            <p>We restore the environment of the valley.</p>
            <p>Our mission is to protect clean rivers for everyone.</p>
            <p>Email info@cleanrivers.org</p>
            <p>Phone: 612-555-0199</p>
            <a href="/about">About</a>
            <script>var mission = "not visible.";</script>
        </body>
        </html>"#
            .to_string(),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/about",
        "<p>Every animal in the valley matters to us.</p>".to_string(),
        1,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("website_information.csv");
    let mut config = Config::default();
    config.output.csv_path = csv_path.display().to_string();

    let report = crawl_to_csv(config, &mock_server.uri())
        .await
        .expect("Crawl failed");

    // Environment and animal tie; declaration order puts environment first
    assert_eq!(report.primary_cause, Some(Cause::Environment));
    assert_eq!(report.secondary_cause, Some(Cause::Animal));

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Type,Category,Content",
            "Contact,Email,info@cleanrivers.org",
            "Contact,Phone,612-555-0199",
            "Main Cause,environment,",
            "Secondary Cause,animal,",
            "Mission Sentence,N/A,Our mission is to protect clean rivers for everyone.",
        ]
    );
}

#[tokio::test]
async fn test_config_file_drives_crawl() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        "<p>Our mission is simple. Our mission is to feed every family in town.</p>".to_string(),
        1,
    )
    .await;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
        [extraction]
        max-mission-sentences = 1
        blacklist = ["simple"]
        "#,
    )
    .unwrap();
    file.flush().unwrap();

    let config = cause_scout::config::load_config(file.path()).unwrap();
    let report = coordinator(config)
        .crawl(&mock_server.uri())
        .await
        .expect("Crawl failed");

    assert_eq!(
        report.mission_sentences,
        vec!["Our mission is to feed every family in town.".to_string()]
    );
}
