//! Page-count pagination via the WordPress `X-WP-TotalPages` header.
//!
//! The WordPress REST API reports the number of pages for the current
//! `per_page` on every list response. The header is read from the first
//! response only; later pages are requested by number.

use reqwest::header::HeaderMap;
use vinofeed_core::PageCountHeader;

/// Reads the total page count from `headers`.
///
/// Missing, non-UTF-8, or non-numeric values are treated as a single page.
#[must_use]
pub fn total_pages(headers: &HeaderMap, header: PageCountHeader) -> u32 {
    parse_total_pages(
        headers
            .get(header.header_name())
            .and_then(|v| v.to_str().ok()),
    )
}

fn parse_total_pages(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(1)
}
