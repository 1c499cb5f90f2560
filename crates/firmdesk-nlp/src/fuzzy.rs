//! Token-sort fuzzy scoring on a 0-100 scale.
//!
//! `ratio` is normalized indel similarity: `100 * 2*LCS / (len_a + len_b)`.
//! Substitution-cost edit distance would be too harsh on short
//! inflections ("fee" vs "fees" must clear 80). `token_sort_ratio` sorts
//! the words of both sides first so word order never counts against a
//! match.

/// Longest common subsequence length over chars, two-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Similarity of two strings, 0-100.
pub fn ratio(a: &str, b: &str) -> f32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    100.0 * (2 * lcs_len(&a, &b)) as f32 / total as f32
}

// Lowercase, fold punctuation into spaces, sort the words.
fn sort_tokens(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// `ratio` with word order ignored on both sides.
pub fn token_sort_ratio(a: &str, b: &str) -> f32 {
    ratio(&sort_tokens(a), &sort_tokens(b))
}

/// Best-scoring candidate for a query, scanning in order. Earlier
/// candidates win ties.
pub fn best_match<'a>(query: &str, candidates: &'a [String]) -> Option<(&'a str, f32)> {
    let mut best: Option<(&'a str, f32)> = None;
    for candidate in candidates {
        let score = token_sort_ratio(query, candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate.as_str(), score)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(ratio("personal injury", "personal injury"), 100.0);
        assert_eq!(token_sort_ratio("", ""), 100.0);
    }

    #[test]
    fn word_order_is_ignored() {
        assert_eq!(token_sort_ratio("accidents car", "car accidents"), 100.0);
        assert_eq!(token_sort_ratio("Law Family", "family law"), 100.0);
    }

    #[test]
    fn short_inflections_clear_the_token_threshold() {
        let score = ratio("fee", "fees");
        assert!(score > 80.0 && score < 90.0, "score = {score}");
    }

    #[test]
    fn single_substitution_on_short_words_scores_low() {
        assert_eq!(ratio("hame", "home"), 75.0);
    }

    #[test]
    fn single_deletion_on_long_labels_stays_high() {
        let score = token_sort_ratio("car acidents", "car accidents");
        assert!(score > 85.0, "score = {score}");
    }

    #[test]
    fn best_match_scans_in_order() {
        let candidates: Vec<String> = ["home", "practice areas", "car accidents"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (label, score) = best_match("car accident", &candidates).unwrap();
        assert_eq!(label, "car accidents");
        assert!(score > 85.0);
        assert!(best_match("anything", &[]).is_none());
    }
}
