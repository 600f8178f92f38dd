//! Meta tag extraction.
//!
//! Pulls the fixed set of SEO-relevant document metadata out of a page:
//! title, description/keywords/robots, Open Graph and Twitter Card fields,
//! canonical link, viewport and charset.

use scraper::{Html, Selector};
use serde::Serialize;
use std::sync::LazyLock;

use crate::utils::parse_selector_with_fallback;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("title", "title extraction"));
static CANONICAL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback("link[rel='canonical']", "canonical extraction")
});
static CHARSET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("meta[charset]", "charset extraction"));

/// `meta` names read by [`extract_meta_tags`].
pub(super) const META_NAMES: [&str; 10] = [
    "description",
    "keywords",
    "robots",
    "og:title",
    "og:description",
    "og:image",
    "twitter:title",
    "twitter:description",
    "twitter:image",
    "viewport",
];

/// `[meta[name=X], meta[property=X]]` for every entry of [`META_NAMES`].
pub(super) static META_SELECTORS: LazyLock<Vec<(&'static str, [Selector; 2])>> =
    LazyLock::new(|| {
        META_NAMES
            .iter()
            .map(|&name| (name, meta_selectors(name)))
            .collect()
    });

/// Document metadata. Absent fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResult {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub robots: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image: Option<String>,
    pub canonical: Option<String>,
    pub viewport: Option<String>,
    pub charset: Option<String>,
}

/// Extracts all metadata fields from a parsed document.
///
/// Never fails: anything missing comes back as `None`.
pub fn extract_meta_tags(document: &Html) -> MetaResult {
    MetaResult {
        title: extract_title(document),
        description: meta_content(document, "description"),
        keywords: meta_content(document, "keywords"),
        robots: meta_content(document, "robots"),
        og_title: meta_content(document, "og:title"),
        og_description: meta_content(document, "og:description"),
        og_image: meta_content(document, "og:image"),
        twitter_title: meta_content(document, "twitter:title"),
        twitter_description: meta_content(document, "twitter:description"),
        twitter_image: meta_content(document, "twitter:image"),
        canonical: first_attr(document, &CANONICAL_SELECTOR, "href"),
        viewport: meta_content(document, "viewport"),
        charset: first_attr(document, &CHARSET_SELECTOR, "charset"),
    }
}

/// Text of the first `<title>`, trimmed; `None` when missing or blank.
pub fn extract_title(document: &Html) -> Option<String> {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string());
    log::debug!("Extracted title: {:?}", title);
    title.filter(|t| !t.is_empty())
}

/// Looks up `content` of `meta[name=X]`, then `meta[property=X]`.
///
/// Open Graph tags are usually written with `property`, but plenty of sites use
/// `name` for them too, so both attributes are checked for every field. An empty
/// `content` counts as missing and lets the next lookup run.
pub fn meta_content(document: &Html, name: &str) -> Option<String> {
    match META_SELECTORS.iter().find(|(known, _)| *known == name) {
        Some((_, selectors)) => first_content(document, selectors),
        None => first_content(document, &meta_selectors(name)),
    }
}

fn meta_selectors(name: &str) -> [Selector; 2] {
    ["name", "property"].map(|attr| {
        parse_selector_with_fallback(
            &format!("meta[{}=\"{}\"]", attr, name),
            "meta tag extraction",
        )
    })
}

fn first_content(document: &Html, selectors: &[Selector; 2]) -> Option<String> {
    selectors
        .iter()
        .find_map(|selector| first_attr(document, selector, "content"))
}

fn first_attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
