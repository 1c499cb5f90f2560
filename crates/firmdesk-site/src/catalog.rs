//! Fixed site catalog: sections, subsections, and their URLs.

/// Root of the firm website.
pub const BASE_URL: &str = "https://stolmeierlaw.com/";

/// Greeting shown with the navigation payload.
pub const WELCOME_MESSAGE: &str =
    "How can I help you? Explore these sections from Stolmeier Law:";

// Hand-curated catalog. Labels are lowercase and unique per level;
// order is meaningful (lookup passes scan in this order).
const CATALOG: &[(&str, &str, &[(&str, &str)])] = &[
    ("home", "https://stolmeierlaw.com/", &[]),
    (
        "practice areas",
        "https://stolmeierlaw.com/practice-areas/",
        &[
            ("car accidents", "https://stolmeierlaw.com/car-accidents/"),
            ("personal injury", "https://stolmeierlaw.com/personal-injury/"),
            ("family law", "https://stolmeierlaw.com/family-law/"),
            ("criminal defense", "https://stolmeierlaw.com/criminal-defense/"),
            ("wrongful death", "https://stolmeierlaw.com/wrongful-death/"),
            (
                "medical malpractice",
                "https://stolmeierlaw.com/medical-malpractice/",
            ),
        ],
    ),
    ("recent results", "https://stolmeierlaw.com/recent-results/", &[]),
    ("about", "https://stolmeierlaw.com/about/", &[]),
    ("blogs", "https://stolmeierlaw.com/blogs/", &[]),
    ("contact us", "https://stolmeierlaw.com/contact-us/", &[]),
];

/// A leaf entry under a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection {
    pub label: String,
    pub url: String,
}

/// A top-level site section. Any section may own subsections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub url: String,
    pub subsections: Vec<Subsection>,
}

/// Ordered, immutable map of the site structure.
#[derive(Debug, Clone)]
pub struct SiteMap {
    sections: Vec<Section>,
}

impl SiteMap {
    /// The shipped catalog.
    pub fn standard() -> Self {
        let sections = CATALOG
            .iter()
            .map(|(label, url, subs)| Section {
                label: (*label).to_string(),
                url: (*url).to_string(),
                subsections: subs
                    .iter()
                    .map(|(sub_label, sub_url)| Subsection {
                        label: (*sub_label).to_string(),
                        url: (*sub_url).to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Top-level section by lowercase label.
    pub fn section_by_label(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    /// URL for a label, checking top-level sections first, then every
    /// section's subsections, in catalog order.
    pub fn url_for_label(&self, label: &str) -> Option<&str> {
        if let Some(section) = self.section_by_label(label) {
            return Some(&section.url);
        }
        self.sections
            .iter()
            .flat_map(|s| s.subsections.iter())
            .find(|sub| sub.label == label)
            .map(|sub| sub.url.as_str())
    }

    /// Reverse lookup: the label a URL belongs to, top-level first.
    pub fn label_for_url(&self, url: &str) -> Option<&str> {
        if let Some(section) = self.sections.iter().find(|s| s.url == url) {
            return Some(&section.label);
        }
        self.sections
            .iter()
            .flat_map(|s| s.subsections.iter())
            .find(|sub| sub.url == url)
            .map(|sub| sub.label.as_str())
    }

    /// All labels in scan order: top-level sections in catalog order,
    /// then subsections grouped under their section.
    pub fn known_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> =
            self.sections.iter().map(|s| s.label.clone()).collect();
        for section in &self.sections {
            labels.extend(section.subsections.iter().map(|sub| sub.label.clone()));
        }
        labels
    }
}
