//! Intent classification over the raw utterance.

use serde::{Deserialize, Serialize};

/// Closed set of user intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Description,
    Causes,
    Contact,
    Fees,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Causes => "causes",
            Self::Contact => "contact",
            Self::Fees => "fees",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Trigger table, scanned in order; the first intent with any hit wins.
// Triggers are substrings of the raw lowercased utterance, not tokens,
// so "because" counts as a causes hit.
const TRIGGERS: &[(Intent, &[&str])] = &[
    (Intent::Causes, &["cause", "reason", "why", "factor"]),
    (Intent::Description, &["about", "tell", "describe", "information"]),
    (Intent::Contact, &["contact", "phone", "email", "address"]),
    (Intent::Fees, &["fee", "cost", "price"]),
];

/// Classify an utterance; unknown phrasing defaults to description.
pub fn classify_intent(raw_text: &str) -> Intent {
    let lower = raw_text.to_lowercase();
    for (intent, words) in TRIGGERS {
        if words.iter().any(|w| lower.contains(w)) {
            return *intent;
        }
    }
    Intent::Description
}
