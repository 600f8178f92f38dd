//! CSS selector parsing utilities.

use scraper::Selector;

/// Selector that can never match, used when a selector string fails to parse.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a CSS selector, falling back to one that matches nothing.
///
/// Selectors here are built from fixed strings (plus, for meta tags, a fixed set
/// of names), so a parse failure is a programming error. It is logged rather
/// than allowed to take down a request.
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        Selector::parse(MATCH_NOTHING)
            .expect("Fallback selector '*:not(*)' should always parse - this is a programming error")
    })
}
