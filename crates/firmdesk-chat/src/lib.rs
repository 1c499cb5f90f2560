//! Firmdesk Chat — turn dispatch over the resolution pipeline.

pub mod engine;

pub use engine::{
    fetch_failure_reply, ChatEngine, CONTACT_FETCH_FAILED_REPLY, CONTACT_NOT_FOUND_REPLY,
    EMPTY_MESSAGE_REPLY, FEEDBACK_ACK, NOT_UNDERSTOOD_REPLY, SECTION_NOT_FOUND_REPLY,
};
