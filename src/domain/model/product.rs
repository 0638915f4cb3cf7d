use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product categories as stored in the catalog.
///
/// The "All" wildcard is not a variant: it only exists as a
/// filter value, see [`CategoryFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Print,
    Branding,
    #[serde(rename = "Creative Design")]
    CreativeDesign,
    Signage,
    Apparel,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Print,
        Category::Branding,
        Category::CreativeDesign,
        Category::Signage,
        Category::Apparel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Print => "Print",
            Category::Branding => "Branding",
            Category::CreativeDesign => "Creative Design",
            Category::Signage => "Signage",
            Category::Apparel => "Apparel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown product category '{}'", s))
    }
}

/// Category selection for the product listing: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    /// Filter values in the order the category sidebar lists them.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.to_string()
    }
}

/// A catalog product. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Whole currency units (KES), no minor unit.
    pub price: u64,
    pub category: Category,
    pub image: String,
    /// Default ordering quantity. Missing or zero means "order one".
    #[serde(default)]
    pub min_quantity: Option<u32>,
    pub delivery_time: String,
}

impl Product {
    /// Quantity a new cart line starts with.
    pub fn initial_quantity(&self) -> u32 {
        match self.min_quantity {
            Some(q) if q > 0 => q,
            _ => 1,
        }
    }
}

/// Renders a price the way the storefront labels it, e.g. `KES 12,500`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("KES {}", grouped)
}
