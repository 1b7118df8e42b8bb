//! URL handling module for Cause-Scout
//!
//! This module provides URL normalization, domain extraction and the
//! same-origin rule that keeps a crawl on one site.

mod domain;
mod normalize;

pub use domain::{extract_domain, Origin};
pub use normalize::{normalize_url, parse_page_url};
