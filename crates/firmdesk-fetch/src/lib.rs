//! Firmdesk Fetch — ordered fetch strategies with per-strategy retries.

pub mod browser;
pub mod http;

use std::future::Future;
use std::time::Duration;

use firmdesk_core::{Error, FetchConfig, Result};
use tracing::{error, info, warn};

pub use browser::BrowserFetch;
pub use http::HttpFetch;

/// Which transport a plan entry uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Browser,
    Http,
}

/// One plan entry: a transport plus its own retry budget.
#[derive(Debug, Clone)]
pub struct StrategySpec {
    pub kind: StrategyKind,
    pub retries: u32,
    pub retry_delay: Duration,
}

/// A source of raw page HTML. `Fetcher` is the production implementation;
/// consumers that need deterministic pages implement it over canned text.
pub trait PageSource: Send + Sync {
    /// Fetch one page. `None` means every avenue was exhausted.
    fn fetch(&self, url: &str) -> impl Future<Output = Option<String>> + Send;
}

/// Live-page fetcher. Strategies run in plan order and the first attempt
/// that yields HTML wins; exhausting the plan is a `None`, never an error.
pub struct Fetcher {
    plan: Vec<StrategySpec>,
    browser: Option<BrowserFetch>,
    http: HttpFetch,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let mut plan = Vec::new();
        // The DevTools client only exists when the plan can dispatch to it.
        let browser = if config.browser_enabled {
            plan.push(StrategySpec {
                kind: StrategyKind::Browser,
                retries: config.retries,
                retry_delay: config.retry_delay,
            });
            Some(BrowserFetch::new(config))
        } else {
            None
        };
        plan.push(StrategySpec {
            kind: StrategyKind::Http,
            retries: config.retries,
            retry_delay: config.retry_delay,
        });
        Self {
            plan,
            browser,
            http: HttpFetch::new(config),
        }
    }

    pub fn plan(&self) -> &[StrategySpec] {
        &self.plan
    }

    async fn attempt(&self, kind: StrategyKind, url: &str) -> Result<String> {
        match kind {
            StrategyKind::Browser => match &self.browser {
                Some(browser) => browser.fetch(url).await,
                None => Err(Error::Fetch("browser strategy not configured".to_string())),
            },
            StrategyKind::Http => self.http.fetch(url).await,
        }
    }
}

impl PageSource for Fetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        for spec in &self.plan {
            let attempts = spec.retries + 1;
            for attempt in 1..=attempts {
                match self.attempt(spec.kind, url).await {
                    Ok(html) => {
                        info!(
                            "fetched {} via {:?} (attempt {}/{})",
                            url, spec.kind, attempt, attempts
                        );
                        return Some(html);
                    }
                    Err(e) => {
                        warn!(
                            "{:?} fetch attempt {}/{} for {} failed: {}",
                            spec.kind, attempt, attempts, url, e
                        );
                        if attempt < attempts {
                            tokio::time::sleep(spec.retry_delay).await;
                        }
                    }
                }
            }
        }
        error!("all fetch strategies exhausted for {}", url);
        None
    }
}
