//! Keyword-to-URL resolution over the catalog.

use firmdesk_core::MatchThresholds;
use firmdesk_nlp::best_match;
use firmdesk_site::SiteMap;
use tracing::debug;

/// Resolve keywords to a section URL. Exact labels win outright: each
/// keyword in caller order is checked against top-level labels, then
/// against the subsections of every section that has any. Only when no
/// keyword matches exactly does one fuzzy pass run over the full label
/// list. `None` means there is nothing to fetch.
pub fn resolve_section(
    keywords: &[String],
    site_map: &SiteMap,
    thresholds: &MatchThresholds,
) -> Option<String> {
    for keyword in keywords {
        let lower = keyword.to_lowercase();
        if let Some(section) = site_map.section_by_label(&lower) {
            return Some(section.url.clone());
        }
        for section in site_map.sections() {
            if let Some(sub) = section.subsections.iter().find(|s| s.label == lower) {
                return Some(sub.url.clone());
            }
        }
    }

    let labels = site_map.known_labels();
    for keyword in keywords {
        if let Some((label, score)) = best_match(keyword, &labels) {
            if score > thresholds.section {
                debug!("fuzzy resolve: {:?} -> {:?} ({:.0})", keyword, label, score);
                return site_map.url_for_label(label).map(|u| u.to_string());
            }
        }
    }

    None
}
