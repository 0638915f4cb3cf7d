use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortfolioCategory {
    Logos,
    Posters,
    Flyers,
    Cards,
    #[serde(rename = "Web Apps")]
    WebApps,
    Branding,
}

impl PortfolioCategory {
    pub const ALL: [PortfolioCategory; 6] = [
        PortfolioCategory::Logos,
        PortfolioCategory::Posters,
        PortfolioCategory::Flyers,
        PortfolioCategory::Cards,
        PortfolioCategory::WebApps,
        PortfolioCategory::Branding,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PortfolioCategory::Logos => "Logos",
            PortfolioCategory::Posters => "Posters",
            PortfolioCategory::Flyers => "Flyers",
            PortfolioCategory::Cards => "Cards",
            PortfolioCategory::WebApps => "Web Apps",
            PortfolioCategory::Branding => "Branding",
        }
    }
}

impl fmt::Display for PortfolioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PortfolioCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PortfolioCategory::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown portfolio category '{}'", s))
    }
}

/// Portfolio grid filter: everything, or one portfolio category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PortfolioFilter {
    #[default]
    All,
    Only(PortfolioCategory),
}

impl PortfolioFilter {
    pub fn matches(&self, category: PortfolioCategory) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for PortfolioFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioFilter::All => f.write_str("All"),
            PortfolioFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for PortfolioFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(PortfolioFilter::All);
        }
        s.parse().map(PortfolioFilter::Only)
    }
}

impl TryFrom<String> for PortfolioFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PortfolioFilter> for String {
    fn from(value: PortfolioFilter) -> Self {
        value.to_string()
    }
}

/// A finished project shown in the creative-designs portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Long-form case study, only rendered in the detail overlay.
    pub full_description: String,
    pub category: PortfolioCategory,
    pub image: String,
    pub client: String,
    pub tools: Vec<String>,
}
