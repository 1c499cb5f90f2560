//! Keyword and intent extraction with one-turn session fallback.

use firmdesk_core::MatchThresholds;
use firmdesk_nlp::{best_match, classify_intent, stem, tokenize, Intent};
use firmdesk_site::SiteMap;
use tracing::debug;

use crate::session::{SessionState, SessionStore};

/// Vocabulary reachable by keyword matching but absent from the catalog.
/// These never resolve to a URL on their own; they steer the content
/// search once a section is chosen.
const AUXILIARY_TERMS: &[&str] = &["firm", "history", "fees", "attorneys"];

/// Filler dropped from the keyword list after matching. "about" is in
/// here and is also a catalog label, so that section stays unreachable
/// by keyword.
const STOPWORDS: &[&str] = &[
    "what", "are", "the", "of", "about", "tell", "me", "i", "want", "to", "know", "on", "in", "a",
    "an", "is", "for",
];

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

fn candidate_labels(site_map: &SiteMap) -> Vec<String> {
    let mut labels = site_map.known_labels();
    labels.extend(AUXILIARY_TERMS.iter().map(|t| t.to_string()));
    labels
}

/// Extract keywords and an intent from one utterance, consulting and then
/// overwriting the session entry. Never fails; a turn with nothing
/// recognizable yields an empty keyword list.
pub fn extract(
    user_text: &str,
    session_id: &str,
    site_map: &SiteMap,
    sessions: &dyn SessionStore,
    thresholds: &MatchThresholds,
) -> (Vec<String>, Intent) {
    let labels = candidate_labels(site_map);
    let tokens: Vec<String> = tokenize(user_text).iter().map(|t| stem(t)).collect();

    // Greedy walk. A two-token phrase gets to claim a label before either
    // token is tried alone; reordering these passes breaks phrase labels
    // whose halves also score on their own.
    let mut picked: Vec<(String, bool)> = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if i + 1 < tokens.len() {
            let phrase = format!("{} {}", tokens[i], tokens[i + 1]);
            if let Some((label, score)) = best_match(&phrase, &labels) {
                if score > thresholds.phrase {
                    picked.push((label.to_string(), true));
                    i += 2;
                    continue;
                }
            }
        }
        match best_match(&tokens[i], &labels) {
            Some((label, score)) if score > thresholds.token => {
                picked.push((label.to_string(), true));
            }
            _ => picked.push((tokens[i].clone(), false)),
        }
        i += 1;
    }

    picked.retain(|(text, _)| !is_stopword(text));

    // Raw leftovers ride along only when a recognized label survived the
    // stopword filter; otherwise the turn yields no keywords and the
    // session fallback below gets its chance.
    let anchored = picked.iter().any(|(_, matched)| *matched);
    let keywords: Vec<String> = if anchored {
        picked.into_iter().map(|(text, _)| text).collect()
    } else {
        Vec::new()
    };

    let intent = classify_intent(user_text);

    let state = sessions.update(session_id, &mut |prior| {
        let mut next = SessionState {
            keywords: keywords.clone(),
            intent,
        };
        if let Some(prior) = prior {
            if next.keywords.is_empty() && !prior.keywords.is_empty() {
                next.keywords = prior.keywords.clone();
            }
            if next.intent == Intent::Description && prior.intent != Intent::Description {
                next.intent = prior.intent;
            }
        }
        next
    });

    debug!(
        "extract: session={} keywords={:?} intent={}",
        session_id, state.keywords, state.intent
    );
    (state.keywords, state.intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn setup() -> (SiteMap, MemorySessionStore, MatchThresholds) {
        (
            SiteMap::standard(),
            MemorySessionStore::new(),
            MatchThresholds::default(),
        )
    }

    #[test]
    fn phrase_match_beats_single_tokens() {
        let (map, sessions, thresholds) = setup();
        let (keywords, intent) =
            extract("Tell me about car accidents", "s1", &map, &sessions, &thresholds);
        assert_eq!(keywords, vec!["car accidents".to_string()]);
        assert_eq!(intent, Intent::Description);
    }

    #[test]
    fn misspelled_phrase_still_resolves_to_the_label() {
        let (map, sessions, thresholds) = setup();
        let (keywords, _) =
            extract("tell me about car acidents", "s1", &map, &sessions, &thresholds);
        assert_eq!(keywords, vec!["car accidents".to_string()]);
    }

    #[test]
    fn gibberish_yields_no_keywords_and_default_intent() {
        let (map, sessions, thresholds) = setup();
        let (keywords, intent) = extract("asdf qwer", "s1", &map, &sessions, &thresholds);
        assert!(keywords.is_empty());
        assert_eq!(intent, Intent::Description);
    }

    #[test]
    fn second_turn_inherits_keywords_and_keeps_new_intent() {
        let (map, sessions, thresholds) = setup();
        extract("Tell me about car accidents", "s1", &map, &sessions, &thresholds);
        let (keywords, intent) = extract("why?", "s1", &map, &sessions, &thresholds);
        assert_eq!(keywords, vec!["car accidents".to_string()]);
        assert_eq!(intent, Intent::Causes);
    }

    #[test]
    fn default_intent_inherits_prior_non_default() {
        let (map, sessions, thresholds) = setup();
        extract("what causes car accidents", "s1", &map, &sessions, &thresholds);
        let (keywords, intent) = extract("tell me more on that", "s1", &map, &sessions, &thresholds);
        assert!(keywords.contains(&"car accidents".to_string()));
        assert_eq!(intent, Intent::Causes);
    }

    #[test]
    fn sessions_do_not_leak_across_ids() {
        let (map, sessions, thresholds) = setup();
        extract("Tell me about car accidents", "s1", &map, &sessions, &thresholds);
        let (keywords, _) = extract("why?", "other", &map, &sessions, &thresholds);
        assert!(keywords.is_empty());
    }

    #[test]
    fn entries_are_overwritten_not_merged() {
        let (map, sessions, thresholds) = setup();
        extract("Tell me about car accidents", "s1", &map, &sessions, &thresholds);
        extract("tell me about personal injury", "s1", &map, &sessions, &thresholds);
        let (keywords, _) = extract("why?", "s1", &map, &sessions, &thresholds);
        assert_eq!(keywords, vec!["personal injury".to_string()]);
    }

    #[test]
    fn raw_tokens_ride_along_with_a_recognized_label() {
        let (map, sessions, thresholds) = setup();
        let (keywords, _) = extract(
            "tell me about car accident settlements",
            "s1",
            &map,
            &sessions,
            &thresholds,
        );
        assert!(keywords.contains(&"car accidents".to_string()));
        assert!(keywords.contains(&"settlement".to_string()));
    }

    #[test]
    fn auxiliary_vocabulary_is_matchable() {
        let (map, sessions, thresholds) = setup();
        let (keywords, intent) = extract("what are your fees", "s1", &map, &sessions, &thresholds);
        assert!(keywords.contains(&"fees".to_string()));
        assert_eq!(intent, Intent::Fees);
    }
}
