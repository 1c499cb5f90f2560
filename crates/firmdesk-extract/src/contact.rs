//! Contact details from the page footer.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::dom::clean_text;

/// Words that mark text (or a whole user message) as contact-related.
pub const CONTACT_MARKERS: &[&str] = &["contact", "phone", "email", "address"];

static FOOTER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("footer").expect("static selector"));

static FOOTER_TEXT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p, div").expect("static selector"));

/// Text of footer elements that mention contact details, joined with
/// spaces. `None` when the page has no footer or nothing in it matched.
/// Elements are filtered on their own direct text so a wrapper div does
/// not duplicate every child it contains.
pub fn contact_text(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let footer = doc.select(&FOOTER_SELECTOR).next()?;

    let mut parts: Vec<String> = Vec::new();
    for el in footer.select(&FOOTER_TEXT_SELECTOR) {
        let own: String = el
            .children()
            .filter_map(|node| node.value().as_text().map(|t| t.text.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if CONTACT_MARKERS.iter().any(|m| own.contains(m)) {
            let text = clean_text(&el);
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
