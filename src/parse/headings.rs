//! Heading structure analysis.
//!
//! Headings are collected level by level (every `h1`, then every `h2`, ...),
//! not in document order. Level jumps are therefore judged against the previous
//! entry in that grouped list, so a page with `h1, h3` reports a jump even when
//! the `h3` appears before the `h1` in the markup.

use scraper::{Html, Selector};
use serde::Serialize;
use std::sync::LazyLock;

use crate::utils::parse_selector_with_fallback;

static LEVEL_SELECTORS: LazyLock<[Selector; 6]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        parse_selector_with_fallback(&format!("h{}", i + 1), "heading extraction")
    })
});

pub const MESSAGE_NO_H1: &str = "No <h1> found";
pub const MESSAGE_MULTIPLE_H1: &str = "Multiple <h1> tags found";
pub const MESSAGE_LEVEL_JUMPS: &str = "Heading structure has level jumps";
pub const MESSAGE_OK: &str = "Heading structure looks good";

/// One heading element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingRecord {
    pub level: u8,
    pub tag: String,
    pub text: String,
}

/// A heading whose level is more than one deeper than the one before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderIssue {
    pub previous: String,
    pub current: String,
    pub text: String,
}

/// Summary of a page's heading structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingReport {
    pub heading_count: usize,
    pub h1_count: usize,
    pub headings: Vec<HeadingRecord>,
    pub order_issues: Vec<OrderIssue>,
    pub message: &'static str,
}

/// Collects `h1`..`h6` grouped by level, in document order within each level.
pub fn extract_headings(document: &Html) -> Vec<HeadingRecord> {
    let mut headings = Vec::new();
    for (index, selector) in LEVEL_SELECTORS.iter().enumerate() {
        let level = index as u8 + 1;
        for element in document.select(selector) {
            headings.push(HeadingRecord {
                level,
                tag: format!("h{level}"),
                text: element.text().collect::<String>().trim().to_string(),
            });
        }
    }
    headings
}

/// Finds skipped levels in a heading sequence.
///
/// `last_level` follows every heading, up or down; only increases by more than
/// one are reported.
pub fn find_order_issues(headings: &[HeadingRecord]) -> Vec<OrderIssue> {
    let mut issues = Vec::new();
    let mut last_level: Option<u8> = None;

    for heading in headings {
        if let Some(last) = last_level {
            if heading.level > last + 1 {
                issues.push(OrderIssue {
                    previous: format!("h{last}"),
                    current: heading.tag.clone(),
                    text: heading.text.clone(),
                });
            }
        }
        last_level = Some(heading.level);
    }

    issues
}

/// Picks the status message: no h1, then multiple h1, then jumps, then OK.
pub fn status_message(h1_count: usize, has_order_issues: bool) -> &'static str {
    match h1_count {
        0 => MESSAGE_NO_H1,
        1 if has_order_issues => MESSAGE_LEVEL_JUMPS,
        1 => MESSAGE_OK,
        _ => MESSAGE_MULTIPLE_H1,
    }
}

/// Runs the full heading analysis over a parsed document.
pub fn analyze_headings(document: &Html) -> HeadingReport {
    let headings = extract_headings(document);
    let order_issues = find_order_issues(&headings);
    let h1_count = headings.iter().filter(|h| h.level == 1).count();
    let message = status_message(h1_count, !order_issues.is_empty());

    HeadingReport {
        heading_count: headings.len(),
        h1_count,
        headings,
        order_issues,
        message,
    }
}
