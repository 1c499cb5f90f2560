//! Firmdesk Extract — page linearization and targeted content extraction.

pub mod contact;
pub mod content;
pub mod dom;

pub use contact::{contact_text, CONTACT_MARKERS};
pub use content::{extract_content, FEEDBACK_PROMPT, MAX_REPLY_LINES, MORE_CONTENT_NOTICE};
pub use dom::{linearize, Block, TagKind, LIST_SEPARATOR};
