//! Domain extraction utilities.
//!
//! WHOIS registries only know registrable domains, so `www.shop.example.co.uk`
//! has to be reduced to `example.co.uk` before a lookup. The Public Suffix List
//! (`psl` crate) decides where the registrable part starts.

use anyhow::Result;

/// Reduces a host name to its registrable domain.
///
/// # Errors
///
/// Returns an error for IP addresses (they have no registrable domain) and for
/// hosts that are themselves a public suffix (e.g. `co.uk`).
pub fn registrable_domain(host: &str) -> Result<String> {
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();

    if host.is_empty() {
        return Err(anyhow::anyhow!("Empty host"));
    }

    let bare = host.trim_start_matches('[').trim_end_matches(']');
    if bare.parse::<std::net::IpAddr>().is_ok() {
        return Err(anyhow::anyhow!(
            "IP addresses do not have registrable domains: {}",
            host
        ));
    }

    psl::domain_str(&host)
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("No registrable domain in host: {}", host))
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
