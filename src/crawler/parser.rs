//! HTML parser for extracting links and visible text
//!
//! This module handles parsing HTML content to extract:
//! - Links to follow (from `<a href>` tags, resolved to absolute URLs)
//! - The page's text view, used by the information extractor
//!
//! `scraper::Html` is not `Send`, so the document never outlives the call to
//! [`parse_html`]; callers get owned data back.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Elements whose text never reaches the text view
const HIDDEN_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// All links found on the page (absolute URLs, deduplicated)
    pub links: HashSet<String>,

    /// Text nodes of the page joined with single spaces
    pub text: String,
}

/// Parses HTML content and extracts links and text
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` anywhere in the document, relative or absolute
///
/// **Exclude:**
/// - `#fragment` links to the same page
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs
/// - Anything that does not resolve to http(s)
///
/// Malformed markup never fails; whatever html5ever recovers is used.
///
/// # Example
///
/// ```no_run
/// use cause_scout::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><body><p>Hello</p><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let parsed = parse_html(html, &base_url);
/// assert!(parsed.links.contains("https://example.com/page"));
/// ```
pub fn parse_html(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        links: collect_links(&document, base_url),
        text: collect_text(&document),
    }
}

fn collect_links(document: &Html, base_url: &Url) -> HashSet<String> {
    let mut links = HashSet::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.insert(absolute_url);
                }
            }
        }
    }

    links
}

fn collect_text(document: &Html) -> String {
    let mut pieces: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_TEXT_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }

        let text: &str = text;
        if !text.trim().is_empty() {
            pieces.push(text);
        }
    }

    pieces.join(" ")
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Same-page anchors
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    fn extract_links(html: &str, base_url: &Url) -> HashSet<String> {
        parse_html(html, base_url).links
    }

    fn extract_text(html: &str) -> String {
        parse_html(html, &base_url()).text
    }

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<html><body><a href="https://other.com/page">Link</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://other.com/page"));
    }

    #[test]
    fn test_extract_relative_link() {
        let html = r#"<html><body><a href="/other">Link</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert!(links.contains("https://example.com/other"));
    }

    #[test]
    fn test_extract_relative_path_link() {
        let html = r#"<html><body><a href="other">Link</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert!(links.contains("https://example.com/other"));
    }

    #[test]
    fn test_links_resolve_against_given_base() {
        let base = Url::parse("https://example.com/blog/post/").unwrap();
        let html = r#"<a href="../archive">Archive</a>"#;
        let links = extract_links(html, &base);
        assert!(links.contains("https://example.com/blog/archive"));
    }

    #[test]
    fn test_skip_special_schemes() {
        let html = r#"
            <a href="javascript:void(0)">Js</a>
            <a href="mailto:test@example.com">Email</a>
            <a href="tel:+1234567890">Call</a>
            <a href="data:text/html,<h1>Test</h1>">Data</a>
            <a href="ftp://example.com/file">Ftp</a>
        "#;
        assert!(extract_links(html, &base_url()).is_empty());
    }

    #[test]
    fn test_skip_fragment_only() {
        let html = r##"<html><body><a href="#section">Jump</a></body></html>"##;
        assert!(extract_links(html, &base_url()).is_empty());
    }

    #[test]
    fn test_skip_empty_href() {
        let html = r#"<a href="">Nothing</a><a href="   ">Blank</a>"#;
        assert!(extract_links(html, &base_url()).is_empty());
    }

    #[test]
    fn test_duplicate_links_collapse() {
        let html = r#"
            <html>
            <body>
                <a href="/page1">Link 1</a>
                <a href="/page1">Link 1 again</a>
                <a href="https://example.com/page1">Absolute</a>
                <a href="/page2">Link 2</a>
            </body>
            </html>
        "#;
        assert_eq!(extract_links(html, &base_url()).len(), 2);
    }

    #[test]
    fn test_text_joins_nodes_with_spaces() {
        let html = "<html><body><h1>Hello</h1><p>world</p></body></html>";
        assert_eq!(extract_text(html), "Hello world");
    }

    #[test]
    fn test_text_excludes_script_and_style() {
        let html = r#"
            <html>
            <head><style>body { color: red; }</style></head>
            <body>
                <p>Visible mission text.</p>
                <script>var mission = "hidden.";</script>
            </body>
            </html>
        "#;
        let text = extract_text(html);
        assert!(text.contains("Visible mission text."));
        assert!(!text.contains("hidden"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_text_of_malformed_html() {
        let html = "<p>Unclosed <b>tags here<div>and more";
        let text = extract_text(html);
        assert!(text.contains("Unclosed"));
        assert!(text.contains("and more"));
    }

    #[test]
    fn test_parse_html_returns_both_views() {
        let html = r#"<p>Email us at hello@example.org.</p><a href="/contact">Contact</a>"#;
        let parsed = parse_html(html, &base_url());
        assert!(parsed.text.contains("hello@example.org"));
        assert!(parsed.links.contains("https://example.com/contact"));
    }
}
