use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level views. The set is closed; every view is reachable from every
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Products,
    CreativeDesigns,
    Contact,
    Services,
    Legal,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::Products,
        View::CreativeDesigns,
        View::Contact,
        View::Services,
        View::Legal,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Products => "products",
            View::CreativeDesigns => "creative-designs",
            View::Contact => "contact",
            View::Services => "services",
            View::Legal => "legal",
        }
    }

    /// Resolves a footer/menu label such as "Creative Designs": lower-cased,
    /// first space turned into a dash.
    pub fn from_label(label: &str) -> Option<View> {
        label.to_lowercase().replacen(' ', "-", 1).parse().ok()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.key() == s)
            .ok_or_else(|| format!("unknown view '{}'", s))
    }
}

/// Which legal document the legal view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalSection {
    #[default]
    Privacy,
    Terms,
    Cookies,
    Sitemap,
}

impl LegalSection {
    pub const ALL: [LegalSection; 4] = [
        LegalSection::Privacy,
        LegalSection::Terms,
        LegalSection::Cookies,
        LegalSection::Sitemap,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LegalSection::Privacy => "privacy",
            LegalSection::Terms => "terms",
            LegalSection::Cookies => "cookies",
            LegalSection::Sitemap => "sitemap",
        }
    }
}

impl FromStr for LegalSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LegalSection::ALL
            .into_iter()
            .find(|l| l.key() == s)
            .ok_or_else(|| format!("unknown legal section '{}'", s))
    }
}

/// Primary navigation links, in display order.
pub const NAV_LINKS: [(&str, View); 4] = [
    ("Home", View::Home),
    ("Products", View::Products),
    ("Creative Designs", View::CreativeDesigns),
    ("Contact", View::Contact),
];
