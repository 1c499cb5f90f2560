//! Targeted content extraction over linearized blocks.

use firmdesk_nlp::Intent;

use crate::dom::{Block, TagKind, LIST_SEPARATOR};

/// Most collected lines that make it into a reply.
pub const MAX_REPLY_LINES: usize = 10;

/// Appended when more lines were collected than the reply carries.
pub const MORE_CONTENT_NOTICE: &str = "... (more content available on the website)";

/// Trailing feedback question on every content reply.
pub const FEEDBACK_PROMPT: &str = "Was this helpful? (Reply 'yes' or 'no')";

// Extra search terms when the user asks for causes.
const CAUSE_EXPANSIONS: &[&str] = &["reason", "factors", "why", "cause", "causes"];

fn contains_any(text_lower: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| text_lower.contains(n.as_str()))
}

fn push_list_items(lines: &mut Vec<String>, block_text: &str) {
    for item in block_text.split(LIST_SEPARATOR) {
        if !item.is_empty() {
            lines.push(format!("- {}", item));
        }
    }
}

/// Walk the blocks and build the reply text for one resolved section.
/// Pure and deterministic: the same keywords, intent, and blocks always
/// produce the same reply.
pub fn extract_content(keywords: &[String], intent: Intent, blocks: &[Block]) -> String {
    let raw_keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let mut search_keywords = raw_keywords.clone();
    if intent == Intent::Causes {
        search_keywords.extend(CAUSE_EXPANSIONS.iter().map(|e| e.to_string()));
    }

    let mut lines: Vec<String> = Vec::new();
    let mut i = 0;
    while i < blocks.len() {
        let block = &blocks[i];
        let lower = block.text.to_lowercase();
        // The second clause is subsumed by the first for description
        // intent; it mirrors the shipped behavior exactly.
        let relevant = contains_any(&lower, &search_keywords)
            || (intent == Intent::Description && contains_any(&lower, &raw_keywords));
        if relevant {
            match block.kind {
                TagKind::Heading(_) => {
                    // A relevant heading absorbs its whole section.
                    lines.push(block.text.clone());
                    let mut j = i + 1;
                    while j < blocks.len() && !blocks[j].kind.is_heading() {
                        if blocks[j].kind == TagKind::List {
                            push_list_items(&mut lines, &blocks[j].text);
                        } else {
                            lines.push(blocks[j].text.clone());
                        }
                        j += 1;
                    }
                    i = j;
                    continue;
                }
                TagKind::List => push_list_items(&mut lines, &block.text),
                TagKind::Paragraph | TagKind::Container => lines.push(block.text.clone()),
            }
        }
        i += 1;
    }

    // Description questions get a taste of the page even when nothing
    // matched; other intents report the miss.
    if lines.is_empty() && intent == Intent::Description {
        lines = blocks
            .iter()
            .filter(|b| b.kind.is_heading() || b.kind == TagKind::Paragraph)
            .take(3)
            .map(|b| b.text.clone())
            .collect();
    }

    let display = keywords.join(" ");
    if lines.is_empty() {
        return format!(
            "Sorry, I couldn't find specific information about {}. Could you rephrase your request?",
            display
        );
    }

    compose_reply(&display, &lines)
}

fn compose_reply(display: &str, lines: &[String]) -> String {
    let mut reply = format!("Here are some details about {} I found on the website:\n", display);
    let shown = lines.len().min(MAX_REPLY_LINES);
    reply.push_str(&lines[..shown].join("\n"));
    if lines.len() > MAX_REPLY_LINES {
        reply.push('\n');
        reply.push_str(MORE_CONTENT_NOTICE);
    }
    reply.push_str("\n\n");
    reply.push_str(FEEDBACK_PROMPT);
    reply
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(text: &str) -> Block {
        Block {
            kind: TagKind::Heading(2),
            text: text.to_string(),
        }
    }

    fn para(text: &str) -> Block {
        Block {
            kind: TagKind::Paragraph,
            text: text.to_string(),
        }
    }

    fn list(text: &str) -> Block {
        Block {
            kind: TagKind::List,
            text: text.to_string(),
        }
    }

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn relevant_heading_absorbs_its_section() {
        let blocks = vec![
            heading("Car Accidents"),
            para("We fight for crash victims."),
            list("Rear-end collisions • Drunk drivers"),
            heading("Unrelated"),
            para("Other text."),
        ];
        let reply = extract_content(&kw(&["car accidents"]), Intent::Description, &blocks);
        assert!(reply.contains("Car Accidents"));
        assert!(reply.contains("We fight for crash victims."));
        assert!(reply.contains("- Rear-end collisions"));
        assert!(reply.contains("- Drunk drivers"));
        assert!(!reply.contains("Other text."));
    }

    #[test]
    fn causes_intent_expands_the_search_terms() {
        let blocks = vec![
            para("Distracted driving is a leading reason for collisions."),
            para("Our office is downtown."),
        ];
        let reply = extract_content(&kw(&["car accidents"]), Intent::Causes, &blocks);
        assert!(reply.contains("Distracted driving"));
        assert!(!reply.contains("downtown"));
    }

    #[test]
    fn description_fallback_takes_first_three_text_blocks() {
        let blocks = vec![
            heading("Welcome"),
            para("First paragraph."),
            para("Second paragraph."),
            para("Third paragraph."),
        ];
        let reply = extract_content(&kw(&["blogs"]), Intent::Description, &blocks);
        assert!(reply.contains("Welcome"));
        assert!(reply.contains("First paragraph."));
        assert!(reply.contains("Second paragraph."));
        assert!(!reply.contains("Third paragraph."));
    }

    #[test]
    fn miss_without_fallback_asks_to_rephrase() {
        let blocks = vec![para("Nothing related here.")];
        let reply = extract_content(&kw(&["fees"]), Intent::Fees, &blocks);
        assert_eq!(
            reply,
            "Sorry, I couldn't find specific information about fees. Could you rephrase your request?"
        );
    }

    #[test]
    fn replies_cap_at_ten_lines_with_a_notice() {
        let blocks: Vec<Block> = (0..12)
            .map(|i| para(&format!("Car accidents item {:02}", i)))
            .collect();
        let reply = extract_content(&kw(&["car accidents"]), Intent::Description, &blocks);
        assert!(reply.contains("Car accidents item 09"));
        assert!(!reply.contains("Car accidents item 10"));
        assert!(reply.contains(MORE_CONTENT_NOTICE));
        assert!(reply.ends_with(FEEDBACK_PROMPT));
    }

    #[test]
    fn short_replies_skip_the_notice() {
        let blocks = vec![para("Car accidents happen.")];
        let reply = extract_content(&kw(&["car accidents"]), Intent::Description, &blocks);
        assert!(!reply.contains(MORE_CONTENT_NOTICE));
        assert!(reply.starts_with(
            "Here are some details about car accidents I found on the website:\n"
        ));
    }

    #[test]
    fn extraction_is_deterministic() {
        let blocks = vec![
            heading("Fees"),
            para("We work on contingency."),
            para("No fee unless we win."),
        ];
        let first = extract_content(&kw(&["fees"]), Intent::Fees, &blocks);
        let second = extract_content(&kw(&["fees"]), Intent::Fees, &blocks);
        assert_eq!(first, second);
    }
}
