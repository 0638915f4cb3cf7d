use crate::app::storefront_service::StorefrontService;
use crate::infra::document::InMemoryDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub storefront: Arc<StorefrontService>,
    /// The document head the storefront writes page metadata into.
    pub document: Arc<InMemoryDocument>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct NavigateRequest {
    /// View key (`home`, `products`, `creative-designs`, `contact`, `services`,
    /// `legal`). Ignored when `label` is given.
    #[serde(default)]
    pub view: Option<String>,
    /// Menu label such as `Creative Designs`.
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LegalSectionRequest {
    /// `privacy`, `terms`, `cookies` or `sitemap`.
    pub section: String,
}

/// Any subset of the three filters; omitted fields are left as they are.
#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiltersRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub portfolio_filter: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateQuantityRequest {
    /// Signed change; the quantity never drops below 1.
    pub delta: i64,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct SlideRequest {
    pub index: usize,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct PromptRequest {
    pub prompt: String,
}
