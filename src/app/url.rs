//! URL validation and normalization utilities.
//!
//! Every endpoint accepts either a bare host (`example.com`, `example.com/path`)
//! or a full `http(s)://` URL. Bare hosts get `https://` prepended; full URLs are
//! used verbatim.

use log::warn;
use url::Url;

/// Maximum URL length (2048 characters), matching common browser and server limits.
const MAX_URL_LENGTH: usize = 2048;

/// Validates and normalizes a URL.
///
/// Adds `https://` if no scheme is present, then checks that the result parses,
/// uses http/https and has a host. Logs a warning and returns `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<Url> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    // Check URL length before normalization to prevent DoS
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return None;
    }

    let normalized = if has_http_scheme(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    match Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some_and(|h| !h.is_empty()) => Some(parsed),
            _ => {
                warn!("Rejecting URL without usable http(s) host: {url}");
                None
            }
        },
        Err(e) => {
            warn!("Rejecting invalid URL '{url}': {e}");
            None
        }
    }
}

/// Returns the lowercase host of a normalized target, without port or path.
pub fn target_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.trim_end_matches('.').to_ascii_lowercase())
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
