//! Firmdesk Site — the fixed site catalog and navigation payloads.

pub mod catalog;
pub mod nav;

pub use catalog::{Section, SiteMap, Subsection, BASE_URL, WELCOME_MESSAGE};
pub use nav::{nav_items, NavItem, NavSubItem};
