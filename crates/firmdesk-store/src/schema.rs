//! SQL schema for the contact cache database.

/// Cached contact snippets keyed by entry kind. `content_hash` is UNIQUE so
/// re-inserting identical text is a no-op while changed text adds a row.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS contact_cache (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    entry_key TEXT NOT NULL,
    content TEXT NOT NULL,
    content_hash TEXT UNIQUE,
    cached_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_contact_cache_entry_key ON contact_cache(entry_key);
"#;
