//! Firmdesk NLP — fuzzy scoring, tokenization, plural folding, intent.

pub mod fuzzy;
pub mod intent;
pub mod stem;
pub mod tokenize;

pub use fuzzy::{best_match, ratio, token_sort_ratio};
pub use intent::{classify_intent, Intent};
pub use stem::stem;
pub use tokenize::tokenize;
