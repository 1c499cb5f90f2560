//! SQLite-backed cache for contact details scraped from the site.

use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use firmdesk_core::{Error, Result};

use crate::schema::SCHEMA_SQL;

/// Entry key under which contact snippets are cached.
const CONTACT_KEY: &str = "contact";

/// Compute SHA-256 content hash.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Persistent cache for contact text, so repeat "contact" questions skip the
/// network round-trip.
pub struct ContactStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl ContactStore {
    /// Open (or create) the cache database at `db_path`. Parent directories
    /// are created as needed.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Self::create_connection(&db_path)?;
        Self::init_schema(&conn)?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path,
        };

        let entries = store.entry_count()?;
        info!(
            "Contact store ready: {} cached entries at {}",
            entries,
            store.db_path.display()
        );
        Ok(store)
    }

    fn create_connection(db_path: &Path) -> Result<Connection> {
        let conn = Connection::open(db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        Ok(conn)
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;
        Ok(())
    }

    /// Cache a contact snippet. Idempotent: text already cached (same hash)
    /// is ignored rather than duplicated.
    pub fn put_contact(&self, content: &str) -> Result<()> {
        let hash = content_hash(content);
        let now = Utc::now().timestamp();

        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "INSERT OR IGNORE INTO contact_cache (entry_key, content, content_hash, cached_at)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let inserted = stmt
            .execute(params![CONTACT_KEY, content, hash, now])
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!("put_contact: {} new row(s)", inserted);
        Ok(())
    }

    /// All cached contact snippets joined in insertion order, or `None` when
    /// nothing has been cached yet.
    pub fn get_contact(&self) -> Result<Option<String>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT content FROM contact_cache WHERE entry_key = ?1 ORDER BY id",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params![CONTACT_KEY], |row| row.get::<_, String>(0))
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut snippets = Vec::new();
        for row in rows {
            snippets.push(row.map_err(|e| Error::Database(e.to_string()))?);
        }

        if snippets.is_empty() {
            Ok(None)
        } else {
            Ok(Some(snippets.join(" ")))
        }
    }

    fn entry_count(&self) -> Result<i64> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached("SELECT COUNT(*) FROM contact_cache")
            .map_err(|e| Error::Database(e.to_string()))?;
        stmt.query_row([], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))
    }
}
