//! Navigation payload for the welcome surface.

use crate::catalog::SiteMap;
use serde::{Deserialize, Serialize};

/// One top-level navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub url: String,
    pub subcategories: Vec<NavSubItem>,
}

/// A nested navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavSubItem {
    pub title: String,
    pub url: String,
}

/// Catalog sections rendered as display entries, catalog order preserved.
pub fn nav_items(map: &SiteMap) -> Vec<NavItem> {
    map.sections()
        .iter()
        .map(|section| NavItem {
            title: capitalize(&section.label),
            url: section.url.clone(),
            subcategories: section
                .subsections
                .iter()
                .map(|sub| NavSubItem {
                    title: capitalize(&sub.label),
                    url: sub.url.clone(),
                })
                .collect(),
        })
        .collect()
}

// First character only; the rest of the label stays as stored.
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
