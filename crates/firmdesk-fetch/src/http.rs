//! Plain HTTP fetch strategy.

use firmdesk_core::{Error, FetchConfig, Result};
use reqwest::Client;

// The site refuses requests without a browser user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

pub struct HttpFetch {
    client: Client,
}

impl HttpFetch {
    pub fn new(config: &FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .expect("http client");
        Self { client }
    }

    /// GET the page body; any non-success status is an error.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Http(e.to_string()))?;
        response.text().await.map_err(|e| Error::Http(e.to_string()))
    }
}
