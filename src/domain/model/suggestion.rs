use serde::{Deserialize, Serialize};

/// Structured answer from the design-suggestion service.
///
/// Every field is required; a payload missing any of them is rejected as a
/// whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSuggestion {
    pub title: String,
    pub description: String,
    pub concept: String,
    /// Ordered colour values, usually hex strings.
    pub color_palette: Vec<String>,
    pub fonts: Vec<String>,
}
