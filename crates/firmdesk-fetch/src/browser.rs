//! Browser fetch strategy over the Chrome DevTools Protocol.
//!
//! Talks to an already-running Chrome started with `--remote-debugging-port`:
//! pick a page target from the DevTools HTTP endpoint, navigate it, wait
//! for scripts to settle, then read the rendered outer HTML.

use std::time::Duration;

use firmdesk_core::{Error, FetchConfig, Result};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;
use tokio::time::timeout;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::debug;

/// Target descriptor from `/json/list`.
#[derive(Debug, Deserialize)]
struct DevToolsTarget {
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "webSocketDebuggerUrl")]
    ws_url: Option<String>,
}

pub struct BrowserFetch {
    client: reqwest::Client,
    devtools_url: String,
    request_timeout: Duration,
    settle_delay: Duration,
}

impl BrowserFetch {
    pub fn new(config: &FetchConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("devtools client");
        Self {
            client,
            devtools_url: config.devtools_url.clone(),
            request_timeout: config.request_timeout,
            settle_delay: config.settle_delay,
        }
    }

    /// Render `url` in an attached Chrome tab and return its outer HTML.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let ws_url = self.page_target().await?;
        debug!("devtools page target: {}", ws_url);

        let (ws_stream, _) = timeout(self.request_timeout, connect_async(&ws_url))
            .await
            .map_err(|_| Error::Fetch("devtools connect timed out".to_string()))?
            .map_err(|e| Error::Fetch(format!("devtools connect: {}", e)))?;
        let (mut write, mut read) = ws_stream.split();

        send_command(&mut write, 1, "Page.navigate", json!({ "url": url })).await?;
        wait_for_response(&mut read, 1, self.request_timeout).await?;

        // Give client-side rendering a moment before reading the DOM.
        tokio::time::sleep(self.settle_delay).await;

        send_command(
            &mut write,
            2,
            "Runtime.evaluate",
            json!({
                "expression": "document.documentElement.outerHTML",
                "returnByValue": true,
            }),
        )
        .await?;
        let evaluated = wait_for_response(&mut read, 2, self.request_timeout).await?;

        evaluated
            .pointer("/result/result/value")
            .and_then(|v| v.as_str())
            .map(|html| html.to_string())
            .ok_or_else(|| Error::Fetch("no document in evaluate response".to_string()))
    }

    /// First page target advertised by the DevTools endpoint.
    async fn page_target(&self) -> Result<String> {
        let endpoint = format!("{}/json/list", self.devtools_url.trim_end_matches('/'));
        let targets: Vec<DevToolsTarget> = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Http(e.to_string()))?
            .json()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        targets
            .into_iter()
            .find(|t| t.kind == "page")
            .and_then(|t| t.ws_url)
            .ok_or_else(|| Error::Fetch("no page target available".to_string()))
    }
}

async fn send_command<S>(write: &mut S, id: u64, method: &str, params: serde_json::Value) -> Result<()>
where
    S: futures::Sink<Message> + Unpin,
    <S as futures::Sink<Message>>::Error: std::fmt::Display,
{
    let frame = json!({ "id": id, "method": method, "params": params }).to_string();
    write
        .send(Message::Text(frame))
        .await
        .map_err(|e| Error::Fetch(format!("devtools send: {}", e)))
}

// Frames that are not the reply to `id` (events, other replies) are
// skipped; a protocol-level error object becomes an Err.
async fn wait_for_response<S>(read: &mut S, id: u64, limit: Duration) -> Result<serde_json::Value>
where
    S: futures::Stream<Item = std::result::Result<Message, tokio_tungstenite::tungstenite::Error>>
        + Unpin,
{
    let waited = timeout(limit, async {
        while let Some(message) = read.next().await {
            let message = message.map_err(|e| Error::Fetch(format!("devtools read: {}", e)))?;
            let text = match message {
                Message::Text(text) => text,
                Message::Close(_) => {
                    return Err(Error::Fetch("devtools socket closed".to_string()))
                }
                _ => continue,
            };
            let value: serde_json::Value = serde_json::from_str(&text)?;
            if value.get("id").and_then(|v| v.as_u64()) == Some(id) {
                if let Some(err) = value.get("error") {
                    return Err(Error::Fetch(format!("devtools command failed: {}", err)));
                }
                return Ok(value);
            }
        }
        Err(Error::Fetch("devtools socket ended".to_string()))
    });
    waited
        .await
        .map_err(|_| Error::Fetch("devtools response timed out".to_string()))?
}
