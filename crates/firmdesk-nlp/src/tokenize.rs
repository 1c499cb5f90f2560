//! Utterance tokenization.

/// Lowercase and split on whitespace and punctuation. Hyphens are kept so
/// compounds like "slip-and-fall" stay one token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || ",.;:!?()[]{}\"'/\\".contains(c))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}
