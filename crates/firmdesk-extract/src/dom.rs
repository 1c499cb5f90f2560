//! Document linearization: HTML to an ordered sequence of typed blocks.
//!
//! Everything downstream of the fetcher works on `Block`s, so the markup
//! parser is swappable without touching the content scan.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Joins list items inside a single `List` block; the content scan splits
/// on it to rebuild bullets.
pub const LIST_SEPARATOR: &str = " • ";

/// Structural role of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Heading(u8),
    Paragraph,
    Container,
    List,
}

impl TagKind {
    pub fn is_heading(&self) -> bool {
        matches!(self, Self::Heading(_))
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(Self::Heading(1)),
            "h2" => Some(Self::Heading(2)),
            "h3" => Some(Self::Heading(3)),
            "h4" => Some(Self::Heading(4)),
            "h5" => Some(Self::Heading(5)),
            "h6" => Some(Self::Heading(6)),
            "p" => Some(Self::Paragraph),
            "div" | "section" | "article" | "span" => Some(Self::Container),
            "ul" | "ol" => Some(Self::List),
            _ => None,
        }
    }
}

/// One text block in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: TagKind,
    pub text: String,
}

static BLOCK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6, p, div, section, article, ul, ol, span")
        .expect("static selector")
});

static LI_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("li").expect("static selector"));

static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

pub(crate) fn clean_text(el: &ElementRef) -> String {
    let joined = el.text().collect::<Vec<_>>().join(" ");
    WS_RE.replace_all(joined.trim(), " ").to_string()
}

/// Flatten a page into typed text blocks. Containers carry their full
/// descendant text, so nested content can appear more than once; the
/// scan downstream relies on document order, not uniqueness. Blocks with
/// no text are dropped.
pub fn linearize(html: &str) -> Vec<Block> {
    let doc = Html::parse_document(html);
    let mut blocks = Vec::new();
    for el in doc.select(&BLOCK_SELECTOR) {
        let kind = match TagKind::from_name(el.value().name()) {
            Some(kind) => kind,
            None => continue,
        };
        let text = match kind {
            TagKind::List => {
                let items: Vec<String> = el
                    .select(&LI_SELECTOR)
                    .map(|li| clean_text(&li))
                    .filter(|t| !t.is_empty())
                    .collect();
                items.join(LIST_SEPARATOR)
            }
            _ => clean_text(&el),
        };
        if text.is_empty() {
            continue;
        }
        blocks.push(Block { kind, text });
    }
    blocks
}
