//! Firmdesk Store — SQLite cache for scraped contact details.

pub mod schema;
pub mod sqlite;

pub use sqlite::ContactStore;
