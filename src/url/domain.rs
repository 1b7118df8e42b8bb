use crate::UrlError;
use std::fmt;
use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host (which shouldn't happen for valid HTTP(S) URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use cause_scout::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.ORG/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.org".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// The part of a URL that decides whether a link stays on the crawled site
///
/// Two URLs share an origin when their hosts match once a leading `www.` is
/// removed and their explicit ports match. The scheme does not take part, so
/// an `http` seed that redirects to `https` keeps its pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    domain: String,
    port: Option<u16>,
}

impl Origin {
    /// Builds the origin of a URL
    pub fn of(url: &Url) -> Result<Self, UrlError> {
        let domain = extract_domain(url).ok_or(UrlError::MissingDomain)?;
        let domain = match domain.strip_prefix("www.") {
            Some(bare) => bare.to_string(),
            None => domain,
        };

        Ok(Self {
            domain,
            port: url.port(),
        })
    }

    /// Returns true if `url` belongs to this origin
    pub fn contains(&self, url: &Url) -> bool {
        Origin::of(url).map(|other| other == *self).unwrap_or(false)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.domain, port),
            None => write!(f, "{}", self.domain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(url: &str) -> Origin {
        Origin::of(&Url::parse(url).unwrap()).unwrap()
    }

    #[test]
    fn test_extract_simple_domain() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_with_port() {
        let url = Url::parse("https://example.com:8080/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_mixed_case() {
        let url = Url::parse("https://Example.COM/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_same_origin_different_paths() {
        let seed = origin("https://example.org/");
        assert!(seed.contains(&Url::parse("https://example.org/about/team").unwrap()));
    }

    #[test]
    fn test_www_prefix_is_same_origin() {
        let seed = origin("https://example.org/");
        assert!(seed.contains(&Url::parse("https://www.example.org/contact").unwrap()));
        assert_eq!(seed, origin("https://WWW.example.org/"));
    }

    #[test]
    fn test_scheme_does_not_matter() {
        let seed = origin("http://example.org/");
        assert!(seed.contains(&Url::parse("https://example.org/donate").unwrap()));
    }

    #[test]
    fn test_other_domain_is_cross_origin() {
        let seed = origin("https://example.org/");
        assert!(!seed.contains(&Url::parse("https://facebook.com/example").unwrap()));
        assert!(!seed.contains(&Url::parse("https://example.org.evil.net/").unwrap()));
    }

    #[test]
    fn test_subdomain_is_cross_origin() {
        let seed = origin("https://example.org/");
        assert!(!seed.contains(&Url::parse("https://shop.example.org/").unwrap()));
    }

    #[test]
    fn test_port_must_match() {
        let seed = origin("http://127.0.0.1:8080/");
        assert!(seed.contains(&Url::parse("http://127.0.0.1:8080/page").unwrap()));
        assert!(!seed.contains(&Url::parse("http://127.0.0.1:9090/page").unwrap()));
    }

    #[test]
    fn test_display() {
        assert_eq!(origin("https://www.example.org/").to_string(), "example.org");
        assert_eq!(origin("http://localhost:3000/").to_string(), "localhost:3000");
    }
}
