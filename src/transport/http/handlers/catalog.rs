use crate::domain::model::{CategoryFilter, PortfolioFilter};
use crate::app::reducer::StorefrontAction;
use crate::transport::http::handlers::common::{json_body, ok, parse_field};
use crate::transport::http::types::{ApiResponse, AppState, FiltersRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/home",
    responses((status = 200, description = "Featured products and designs, spotlight product; `loading` until the catalog arrives", body = ApiResponse))
)]
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.storefront.read(|s| s.home_sections()).await)
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses((status = 200, description = "Products matching the current category and search", body = ApiResponse))
)]
pub async fn products_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.storefront.read(|s| s.filtered_products()).await)
}

#[utoipa::path(
    get,
    path = "/api/portfolio",
    responses((status = 200, description = "Portfolio items matching the current portfolio filter", body = ApiResponse))
)]
pub async fn portfolio_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.storefront.read(|s| s.filtered_portfolio()).await)
}

#[utoipa::path(
    post,
    path = "/api/filters",
    request_body = FiltersRequest,
    responses(
        (status = 200, description = "Filters updated", body = ApiResponse),
        (status = 400, description = "Unknown category", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn filters_handler(
    State(state): State<AppState>,
    request: Result<Json<FiltersRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(
        request,
        "{\"category\"?: ..., \"searchQuery\"?: ..., \"portfolioFilter\"?: ...}",
    ) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    // Validate everything before touching state.
    let category = match request.category.as_deref().map(parse_field::<CategoryFilter>) {
        Some(Err(resp)) => return resp,
        Some(Ok(c)) => Some(c),
        None => None,
    };
    let portfolio_filter = match request
        .portfolio_filter
        .as_deref()
        .map(parse_field::<PortfolioFilter>)
    {
        Some(Err(resp)) => return resp,
        Some(Ok(f)) => Some(f),
        None => None,
    };

    let storefront = &state.storefront;
    if let Some(category) = category {
        storefront
            .dispatch(StorefrontAction::SelectCategory(category))
            .await;
    }
    if let Some(query) = request.search_query {
        storefront
            .dispatch(StorefrontAction::SetSearchQuery(query))
            .await;
    }
    if let Some(filter) = portfolio_filter {
        storefront
            .dispatch(StorefrontAction::SelectPortfolioFilter(filter))
            .await;
    }

    ok(storefront.read(|s| s.filters().clone()).await)
}

#[utoipa::path(
    post,
    path = "/api/catalog/reload",
    responses((status = 200, description = "Reload started (no-op while a fetch is pending)", body = ApiResponse))
)]
pub async fn reload_catalog_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.storefront.reload_catalog().await;
    ok(state.storefront.snapshot().await)
}
