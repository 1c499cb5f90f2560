//! Firmdesk Resolve — utterance to keywords, intent, and section URL.

pub mod extract;
pub mod section;
pub mod session;

pub use extract::extract;
pub use section::resolve_section;
pub use session::{MemorySessionStore, SessionState, SessionStore};
