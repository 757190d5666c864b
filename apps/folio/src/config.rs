use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_SOURCE: &str = "./data/resume.json";
const DEFAULT_OUTPUT: &str = "dist/index.html";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Renderer configuration loaded from environment variables.
/// Every variable is optional; command-line flags override these values in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resume document location: an `http(s)://` URL or a filesystem path.
    pub source: String,
    /// Host page to inject into. `None` uses the embedded default page.
    pub template: Option<PathBuf>,
    pub output: PathBuf,
    /// `None` waits on the fetch indefinitely.
    pub fetch_timeout: Option<Duration>,
    pub preview_port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout_secs = match std::env::var("FOLIO_FETCH_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("FOLIO_FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        Ok(Config {
            source: std::env::var("FOLIO_SOURCE").unwrap_or_else(|_| DEFAULT_SOURCE.to_string()),
            template: std::env::var("FOLIO_TEMPLATE").ok().map(PathBuf::from),
            output: std::env::var("FOLIO_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT)),
            fetch_timeout: timeout_from_secs(timeout_secs),
            preview_port: std::env::var("FOLIO_PREVIEW_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("FOLIO_PREVIEW_PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Zero disables the timeout.
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
