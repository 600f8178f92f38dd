//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger and TLS provider initialization
//!
//! All endpoints are implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_audit::initialization::{init_crypto_provider, init_logger_with};
use seo_audit::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the working directory, falling back to the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    init_crypto_provider();

    if let Err(e) = run_server(config).await {
        eprintln!("seo_audit error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
