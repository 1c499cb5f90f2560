//! Plural folding for catalog-term matching.
//!
//! Folds English noun plurals so that "injuries" lines up with the
//! "personal injury" label and "fees" with the fees vocabulary. Verb and
//! adjective suffixes are left alone: stripping them would mangle label
//! words like "criminal", "wrongful", and "family".

/// Fold a plural word to its singular form. Words of three characters or
/// fewer pass through unchanged.
pub fn stem(word: &str) -> String {
    if word.len() <= 3 {
        return word.to_string();
    }

    // Plural rules: (suffix, replacement). Longer suffixes first; the
    // identity rules (ss, us, is) stop "address" and "analysis" from
    // losing their tails.
    let suffixes: &[(&str, &str)] = &[
        ("ies", "y"),
        ("ches", "ch"),
        ("shes", "sh"),
        ("xes", "x"),
        ("zes", "z"),
        ("ses", "s"),
        ("oes", "o"),
        ("es", "e"),
        ("ss", "ss"),
        ("us", "us"),
        ("is", "is"),
        ("s", ""),
    ];

    for &(suffix, replacement) in suffixes {
        if word.len() > suffix.len() + 1 && word.ends_with(suffix) {
            let base = &word[..word.len() - suffix.len()];
            return format!("{}{}", base, replacement);
        }
    }

    word.to_string()
}
