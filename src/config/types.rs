//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BACKLINK_REPORT_BASE, DEFAULT_BIND_ADDR, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_PAGESPEED_ENDPOINT, DEFAULT_PORT, DEFAULT_USER_AGENT, DEFAULT_WHOIS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for log shippers
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Every option can be given on the command line or through the environment
/// (a `.env` file is loaded by the binary before parsing).
///
/// # Examples
///
/// ```no_run
/// use seo_audit::Config;
///
/// let config = Config {
///     port: 8080,
///     google_api_key: Some("my-key".to_string()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "seo_audit", version, about = "SEO audit HTTP service")]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind the listener to
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: IpAddr,

    /// API key for Google PageSpeed Insights
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    /// PageSpeed Insights endpoint
    #[arg(long, env = "PAGESPEED_ENDPOINT", default_value = DEFAULT_PAGESPEED_ENDPOINT)]
    pub pagespeed_endpoint: String,

    /// Prefix of the backlink report page (target is appended as `http://<domain>`)
    #[arg(long, env = "BACKLINK_REPORT_BASE", default_value = DEFAULT_BACKLINK_REPORT_BASE)]
    pub backlink_report_base: String,

    /// Upper bound for a whole WHOIS lookup in seconds
    #[arg(long, env = "WHOIS_TIMEOUT_SECONDS", default_value_t = DEFAULT_WHOIS_TIMEOUT_SECS)]
    pub whois_timeout_seconds: u64,

    /// Path to a Chrome/Chromium binary (auto-detected when unset)
    #[arg(long, env = "CHROME_PATH")]
    pub chrome_path: Option<std::path::PathBuf>,

    /// Timeout for outbound HTTP requests in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECONDS", default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value for page fetches
    #[arg(long, env = "USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: IpAddr::from([0, 0, 0, 0]),
            google_api_key: None,
            pagespeed_endpoint: DEFAULT_PAGESPEED_ENDPOINT.to_string(),
            backlink_report_base: DEFAULT_BACKLINK_REPORT_BASE.to_string(),
            whois_timeout_seconds: DEFAULT_WHOIS_TIMEOUT_SECS,
            chrome_path: None,
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Socket address the server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Checks option values that clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.port == 0 {
            return Err(ConfigValidationError {
                field: "port",
                message: "port must be greater than 0".to_string(),
            });
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "timeout_seconds must be greater than 0".to_string(),
            });
        }
        if !is_http_url(&self.pagespeed_endpoint) {
            return Err(ConfigValidationError {
                field: "pagespeed_endpoint",
                message: format!(
                    "expected an http(s) URL, got '{}'",
                    self.pagespeed_endpoint
                ),
            });
        }
        if !is_http_url(&self.backlink_report_base) {
            return Err(ConfigValidationError {
                field: "backlink_report_base",
                message: format!(
                    "expected an http(s) URL, got '{}'",
                    self.backlink_report_base
                ),
            });
        }
        if self.whois_timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "whois_timeout_seconds",
                message: "whois_timeout_seconds must be greater than 0".to_string(),
            });
        }
        if matches!(&self.google_api_key, Some(key) if key.trim().is_empty()) {
            return Err(ConfigValidationError {
                field: "google_api_key",
                message: "google_api_key is set but empty; unset it to call PageSpeed without a key"
                    .to_string(),
            });
        }
        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECS);
        assert!(config.google_api_key.is_none());
        assert_eq!(config.pagespeed_endpoint, DEFAULT_PAGESPEED_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_listen_addr() {
        let config = Config {
            port: 8080,
            bind: IpAddr::from([127, 0, 0, 1]),
            ..Default::default()
        };
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "port");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "timeout_seconds");

        let config = Config {
            whois_timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "whois_timeout_seconds");
    }

    #[test]
    fn test_validate_rejects_non_http_endpoints() {
        let config = Config {
            pagespeed_endpoint: "ftp://example.com/run".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "pagespeed_endpoint");

        let config = Config {
            backlink_report_base: "not a url".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "backlink_report_base");
    }

    #[test]
    fn test_validate_rejects_blank_api_key() {
        let config = Config {
            google_api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "google_api_key");
    }

    #[test]
    fn test_parse_from_args() {
        let config = Config::try_parse_from([
            "seo_audit",
            "--port",
            "7000",
            "--log-format",
            "json",
            "--google-api-key",
            "abc",
        ])
        .unwrap();
        assert_eq!(config.port, 7000);
        assert!(matches!(config.log_format, LogFormat::Json));
        assert_eq!(config.google_api_key.as_deref(), Some("abc"));
    }
}
