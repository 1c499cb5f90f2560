//! One turn in, one reply string out.
//!
//! The engine owns the pipeline pieces (catalog, sessions, fetcher, cache)
//! and runs the dispatch: contact shortcut, feedback acknowledgment, then
//! extract / resolve / fetch / compose.

use firmdesk_core::{FirmdeskConfig, MatchThresholds, Result};
use firmdesk_extract::{contact_text, extract_content, linearize, CONTACT_MARKERS};
use firmdesk_fetch::{Fetcher, PageSource};
use firmdesk_nlp::Intent;
use firmdesk_resolve::{extract, resolve_section, MemorySessionStore};
use firmdesk_site::{nav_items, NavItem, SiteMap, BASE_URL, WELCOME_MESSAGE};
use firmdesk_store::ContactStore;
use tracing::debug;

/// Reply when the request carried no message text.
pub const EMPTY_MESSAGE_REPLY: &str = "Please provide a message.";

/// Acknowledgment for a bare "yes"/"no" feedback turn.
pub const FEEDBACK_ACK: &str = "Thank you for your feedback! How can I assist you further?";

/// Reply when no keywords were extracted this turn or inherited.
pub const NOT_UNDERSTOOD_REPLY: &str =
    "Sorry, I couldn't understand your request. Could you provide more details?";

/// Reply when keywords resolve to no catalog section, and for section
/// requests naming a URL outside the catalog.
pub const SECTION_NOT_FOUND_REPLY: &str = "Sorry, I couldn't find the requested section.";

/// Reply when the site could not be fetched for contact details.
pub const CONTACT_FETCH_FAILED_REPLY: &str = "Sorry, I couldn't fetch contact information.";

/// Reply when the fetched page carried no recognizable contact text.
pub const CONTACT_NOT_FOUND_REPLY: &str = "No contact information found on the website.";

/// Reply when a resolved section's page could not be fetched.
pub fn fetch_failure_reply(keywords: &[String]) -> String {
    format!(
        "Sorry, I couldn't fetch the content for {}.",
        keywords.join(" ")
    )
}

/// Everything one conversation turn needs, wired together once at startup
/// and shared across requests. Generic over the page source, defaulting
/// to the live strategy-plan `Fetcher`.
pub struct ChatEngine<F = Fetcher> {
    site_map: SiteMap,
    sessions: MemorySessionStore,
    fetcher: F,
    store: ContactStore,
    thresholds: MatchThresholds,
}

impl ChatEngine {
    pub fn new(config: &FirmdeskConfig) -> Result<Self> {
        Ok(Self {
            site_map: SiteMap::standard(),
            sessions: MemorySessionStore::new(),
            fetcher: Fetcher::new(&config.fetch),
            store: ContactStore::open(&config.data_paths.db_file)?,
            thresholds: config.thresholds,
        })
    }
}

impl<F: PageSource> ChatEngine<F> {
    /// Welcome message plus the ordered navigation payload.
    pub fn navigation(&self) -> (&'static str, Vec<NavItem>) {
        (WELCOME_MESSAGE, nav_items(&self.site_map))
    }

    /// Process one chat turn. Dispatch order is load-bearing: the contact
    /// shortcut and the feedback acknowledgment run before the pipeline,
    /// so those turns never touch the extractor or the session entry.
    /// `Err` only for contact-store failures.
    pub async fn process_turn(&self, message: &str, session_id: &str) -> Result<String> {
        if message.is_empty() {
            return Ok(EMPTY_MESSAGE_REPLY.to_string());
        }

        let lower = message.to_lowercase();
        if CONTACT_MARKERS.iter().any(|m| lower.contains(m)) {
            return self.contact_reply().await;
        }

        let trimmed = lower.trim();
        if trimmed == "yes" || trimmed == "no" {
            debug!("feedback for session {}: {}", session_id, trimmed);
            return Ok(FEEDBACK_ACK.to_string());
        }

        let (keywords, intent) = extract(
            message,
            session_id,
            &self.site_map,
            &self.sessions,
            &self.thresholds,
        );
        if keywords.is_empty() {
            return Ok(NOT_UNDERSTOOD_REPLY.to_string());
        }

        let Some(url) = resolve_section(&keywords, &self.site_map, &self.thresholds) else {
            debug!("no URL found for keywords: {:?}", keywords);
            return Ok(SECTION_NOT_FOUND_REPLY.to_string());
        };

        Ok(self.section_content(&keywords, intent, &url).await)
    }

    /// Fetch one catalog page by URL and return its description excerpt.
    /// The session entry is neither consulted nor written.
    pub async fn section_reply(&self, url: &str) -> String {
        let Some(label) = self.site_map.label_for_url(url) else {
            return SECTION_NOT_FOUND_REPLY.to_string();
        };
        let keywords = vec![label.to_string()];
        self.section_content(&keywords, Intent::Description, url).await
    }

    async fn section_content(&self, keywords: &[String], intent: Intent, url: &str) -> String {
        match self.fetcher.fetch(url).await {
            Some(html) => extract_content(keywords, intent, &linearize(&html)),
            None => fetch_failure_reply(keywords),
        }
    }

    /// Cached contact text when present; otherwise one live fetch of the
    /// site root. Only genuinely extracted text is persisted, so a failed
    /// fetch never poisons the cache.
    async fn contact_reply(&self) -> Result<String> {
        if let Some(cached) = self.store.get_contact()? {
            debug!("contact details served from cache");
            return Ok(cached);
        }

        let Some(html) = self.fetcher.fetch(BASE_URL).await else {
            return Ok(CONTACT_FETCH_FAILED_REPLY.to_string());
        };
        match contact_text(&html) {
            Some(text) => {
                self.store.put_contact(&text)?;
                Ok(text)
            }
            None => Ok(CONTACT_NOT_FOUND_REPLY.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firmdesk_core::{DataPaths, FetchConfig, FirmdeskConfig};
    use tempfile::TempDir;

    // Browser disabled so no test ever waits on a DevTools endpoint; the
    // paths exercised here all return before any fetch.
    fn test_config(dir: &TempDir) -> FirmdeskConfig {
        FirmdeskConfig {
            port: 0,
            data_paths: DataPaths::new(dir.path()).unwrap(),
            thresholds: MatchThresholds::default(),
            fetch: FetchConfig {
                browser_enabled: false,
                ..FetchConfig::default()
            },
        }
    }

    // Canned page source: every URL yields the same configured page.
    struct StubFetch {
        page: Option<&'static str>,
    }

    impl PageSource for StubFetch {
        async fn fetch(&self, _url: &str) -> Option<String> {
            self.page.map(String::from)
        }
    }

    fn stub_engine(dir: &TempDir, page: Option<&'static str>) -> ChatEngine<StubFetch> {
        let config = test_config(dir);
        ChatEngine {
            site_map: SiteMap::standard(),
            sessions: MemorySessionStore::new(),
            fetcher: StubFetch { page },
            store: ContactStore::open(&config.data_paths.db_file).unwrap(),
            thresholds: config.thresholds,
        }
    }

    #[tokio::test]
    async fn empty_message_prompts_for_input() {
        let dir = TempDir::new().unwrap();
        let engine = ChatEngine::new(&test_config(&dir)).unwrap();
        assert_eq!(
            engine.process_turn("", "s1").await.unwrap(),
            EMPTY_MESSAGE_REPLY
        );
    }

    #[tokio::test]
    async fn feedback_is_acknowledged_after_trim_and_lowercase() {
        let dir = TempDir::new().unwrap();
        let engine = ChatEngine::new(&test_config(&dir)).unwrap();
        assert_eq!(engine.process_turn(" YES ", "s1").await.unwrap(), FEEDBACK_ACK);
        assert_eq!(engine.process_turn("no", "s1").await.unwrap(), FEEDBACK_ACK);
    }

    #[tokio::test]
    async fn contact_questions_shortcut_to_the_cache() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        {
            let store = ContactStore::open(&config.data_paths.db_file).unwrap();
            store.put_contact("Phone: (210) 227-3612").unwrap();
        }

        let engine = ChatEngine::new(&config).unwrap();
        assert_eq!(
            engine
                .process_turn("what's your phone number", "s1")
                .await
                .unwrap(),
            "Phone: (210) 227-3612"
        );
    }

    #[tokio::test]
    async fn gibberish_is_not_understood() {
        let dir = TempDir::new().unwrap();
        let engine = ChatEngine::new(&test_config(&dir)).unwrap();
        assert_eq!(
            engine.process_turn("asdf qwer", "s1").await.unwrap(),
            NOT_UNDERSTOOD_REPLY
        );
    }

    #[tokio::test]
    async fn keywords_without_a_section_report_the_miss() {
        let dir = TempDir::new().unwrap();
        let engine = ChatEngine::new(&test_config(&dir)).unwrap();
        // "fees" is matchable vocabulary but no catalog section carries it.
        assert_eq!(
            engine.process_turn("what are your fees", "s1").await.unwrap(),
            SECTION_NOT_FOUND_REPLY
        );
    }

    #[tokio::test]
    async fn section_requests_outside_the_catalog_are_rejected() {
        let dir = TempDir::new().unwrap();
        let engine = ChatEngine::new(&test_config(&dir)).unwrap();
        assert_eq!(
            engine.section_reply("https://example.com/").await,
            SECTION_NOT_FOUND_REPLY
        );
    }

    #[tokio::test]
    async fn navigation_returns_welcome_and_ordered_items() {
        let dir = TempDir::new().unwrap();
        let engine = ChatEngine::new(&test_config(&dir)).unwrap();
        let (message, items) = engine.navigation();
        assert_eq!(message, WELCOME_MESSAGE);
        assert_eq!(items.len(), 6);
        assert_eq!(items[1].title, "Practice areas");
        assert_eq!(items[1].subcategories.len(), 6);
    }

    #[test]
    fn fetch_failure_reply_space_joins_keywords() {
        let keywords = vec!["car accidents".to_string()];
        assert_eq!(
            fetch_failure_reply(&keywords),
            "Sorry, I couldn't fetch the content for car accidents."
        );
        let keywords = vec!["personal".to_string(), "injury".to_string()];
        assert_eq!(
            fetch_failure_reply(&keywords),
            "Sorry, I couldn't fetch the content for personal injury."
        );
    }

    #[tokio::test]
    async fn fetch_failure_still_completes_the_turn() {
        let dir = TempDir::new().unwrap();
        let engine = stub_engine(&dir, None);
        assert_eq!(
            engine
                .process_turn("tell me about car accidents", "s1")
                .await
                .unwrap(),
            "Sorry, I couldn't fetch the content for car accidents."
        );
    }

    #[tokio::test]
    async fn resolved_section_replies_from_the_fetched_page() {
        let dir = TempDir::new().unwrap();
        let page = "<html><body>\
                    <h2>Car Accidents</h2>\
                    <p>We represent car accident victims across San Antonio.</p>\
                    </body></html>";
        let engine = stub_engine(&dir, Some(page));
        let reply = engine
            .process_turn("tell me about car accidents", "s1")
            .await
            .unwrap();
        assert!(
            reply.starts_with("Here are some details about car accidents I found on the website:")
        );
        assert!(reply.contains("We represent car accident victims"));
        assert!(reply.ends_with("Was this helpful? (Reply 'yes' or 'no')"));
    }

    #[tokio::test]
    async fn contact_fetch_failure_is_reported_not_cached() {
        let dir = TempDir::new().unwrap();
        let engine = stub_engine(&dir, None);
        assert_eq!(
            engine.process_turn("contact", "s1").await.unwrap(),
            CONTACT_FETCH_FAILED_REPLY
        );
        assert_eq!(engine.store.get_contact().unwrap(), None);
    }

    #[tokio::test]
    async fn contact_page_without_details_is_reported_not_cached() {
        let dir = TempDir::new().unwrap();
        let engine = stub_engine(&dir, Some("<html><body><p>Welcome.</p></body></html>"));
        assert_eq!(
            engine.process_turn("what is your address", "s1").await.unwrap(),
            CONTACT_NOT_FOUND_REPLY
        );
        assert_eq!(engine.store.get_contact().unwrap(), None);
    }

    #[tokio::test]
    async fn extracted_contact_details_are_persisted() {
        let dir = TempDir::new().unwrap();
        let page = "<html><body><footer>\
                    <p>Phone: (210) 227-3612</p>\
                    <p>Email: info@stolmeierlaw.com</p>\
                    </footer></body></html>";
        let engine = stub_engine(&dir, Some(page));
        let reply = engine.process_turn("how do I contact you", "s1").await.unwrap();
        assert!(reply.contains("(210) 227-3612"));
        assert_eq!(engine.store.get_contact().unwrap(), Some(reply));
    }
}
