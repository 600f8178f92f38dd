//! HTML parsing and data extraction.
//!
//! This module extracts SEO data from fetched HTML:
//! - Meta tags (title, description, Open Graph, Twitter Cards, canonical, charset)
//! - Heading structure (h1-h6, level jumps, h1 count)
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod headings;
mod meta;

// Re-export public API
pub use headings::{
    analyze_headings, extract_headings, find_order_issues, status_message, HeadingRecord,
    HeadingReport, OrderIssue, MESSAGE_LEVEL_JUMPS, MESSAGE_MULTIPLE_H1, MESSAGE_NO_H1,
    MESSAGE_OK,
};
pub use meta::{extract_meta_tags, extract_title, meta_content, MetaResult};
