//! Configuration constants.
//!
//! Timeouts, size limits and upstream defaults used across the audit checks.

// Server defaults
/// Default listening port when neither `--port` nor `PORT` is set
pub const DEFAULT_PORT: u16 = 5000;
/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

// Network operation timeouts
/// Per-request timeout for outbound HTTP calls (page fetches, PageSpeed)
/// PageSpeed runs a full Lighthouse pass upstream and regularly takes 15-25s
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// TLS handshake timeout in seconds
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;
/// Port used for certificate inspection
pub const HTTPS_PORT: u16 = 443;

/// Default User-Agent string for page fetches.
///
/// Some sites serve stripped-down markup to unknown clients, so page fetches
/// present themselves as a current desktop Chrome.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum fetched page size in bytes (2MB)
/// Larger pages are rejected rather than parsed
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;
/// Maximum number of redirect hops followed by page fetches
pub const MAX_REDIRECT_HOPS: usize = 10;

// PageSpeed Insights
/// Google PageSpeed Insights v5 endpoint
pub const DEFAULT_PAGESPEED_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

// WHOIS
/// Upper bound for one WHOIS lookup (RDAP attempt plus WHOIS fallback) in seconds
pub const DEFAULT_WHOIS_TIMEOUT_SECS: u64 = 30;

// Backlink scraping
/// OpenLinkProfiler report prefix; the target is appended as `http://<domain>`
pub const DEFAULT_BACKLINK_REPORT_BASE: &str = "https://openlinkprofiler.org/r/";
/// Fixed pause after navigation so the report's scripts can start rendering
pub const BACKLINK_SETTLE_DELAY_SECS: u64 = 5;
/// Upper bound on waiting for the backlink table to appear
pub const BACKLINK_TABLE_TIMEOUT_SECS: u64 = 30;
/// Browser is torn down if it sits idle longer than this
pub const BROWSER_IDLE_TIMEOUT_SECS: u64 = 90;
/// Maximum number of backlink rows returned per request
pub const MAX_BACKLINK_ROWS: usize = 10;
/// Row selector for the rendered backlink table
pub const BACKLINK_ROW_SELECTOR: &str = "#backlinktable tbody tr";
/// Placeholder used for cells missing from a backlink row
pub const MISSING_CELL_PLACEHOLDER: &str = "N/A";
