//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Paths to all Firmdesk data directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// SQLite database directory (`data/db/`).
    pub db: PathBuf,
    /// Contact cache database (`data/db/firmdesk.db`).
    pub db_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let db = root.join("db");
        let paths = Self {
            db_file: db.join("firmdesk.db"),
            db,
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.db)?;
        Ok(())
    }
}

/// Similarity thresholds for the fuzzy-matching passes, on the 0-100
/// score scale. A candidate is accepted only when its score is strictly
/// greater than the threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchThresholds {
    /// Two-token phrase match against catalog labels.
    pub phrase: f32,
    /// Single-token match against catalog labels.
    pub token: f32,
    /// Keyword-to-section match in the resolver's fuzzy pass.
    pub section: f32,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            phrase: 85.0,
            token: 80.0,
            section: 85.0,
        }
    }
}

/// Fetch behavior: retry budgets, delays, and the DevTools endpoint for
/// the browser strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Retries per strategy after the first attempt.
    pub retries: u32,
    /// Fixed delay between attempts of the same strategy.
    pub retry_delay: Duration,
    /// Per-attempt timeout for HTTP requests and CDP commands.
    pub request_timeout: Duration,
    /// Wait after navigation before reading the rendered document.
    pub settle_delay: Duration,
    /// Chrome DevTools HTTP endpoint (`FIRMDESK_DEVTOOLS`).
    pub devtools_url: String,
    /// Whether the browser strategy is attempted at all
    /// (disabled by `FIRMDESK_NO_BROWSER`).
    pub browser_enabled: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            retries: 2,
            retry_delay: Duration::from_secs(2),
            request_timeout: Duration::from_secs(10),
            settle_delay: Duration::from_secs(2),
            devtools_url: "http://127.0.0.1:9222".to_string(),
            browser_enabled: true,
        }
    }
}

impl FetchConfig {
    /// Create fetch configuration from environment and defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("FIRMDESK_DEVTOOLS") {
            if !url.is_empty() {
                config.devtools_url = url;
            }
        }
        if std::env::var("FIRMDESK_NO_BROWSER").is_ok() {
            config.browser_enabled = false;
        }
        config
    }
}

/// Top-level Firmdesk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmdeskConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Fuzzy-matching thresholds.
    pub thresholds: MatchThresholds,
    /// Fetch strategy configuration.
    pub fetch: FetchConfig,
}

impl FirmdeskConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3006);

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            thresholds: MatchThresholds::default(),
            fetch: FetchConfig::from_env(),
        })
    }
}
