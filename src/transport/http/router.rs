use crate::transport::http::handlers::{
    assistant, cart, catalog, health, navigation, showcase, state,
};
use crate::transport::http::types::{
    AddToCartRequest, ApiResponse, FiltersRequest, LegalSectionRequest, NavigateRequest,
    PromptRequest, SlideRequest, UpdateQuantityRequest,
};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        state::state_handler,
        catalog::home_handler,
        catalog::products_handler,
        catalog::portfolio_handler,
        catalog::filters_handler,
        catalog::reload_catalog_handler,
        navigation::navigate_handler,
        navigation::legal_handler,
        navigation::open_search_handler,
        navigation::close_search_handler,
        navigation::submit_search_handler,
        cart::add_to_cart_handler,
        cart::remove_from_cart_handler,
        cart::update_quantity_handler,
        cart::open_cart_handler,
        cart::close_cart_handler,
        cart::checkout_handler,
        showcase::open_project_handler,
        showcase::close_project_handler,
        showcase::similar_project_handler,
        showcase::hero_slide_handler,
        showcase::portfolio_slide_handler,
        assistant::set_prompt_handler,
        assistant::submit_prompt_handler
    ),
    components(schemas(
        ApiResponse,
        NavigateRequest,
        LegalSectionRequest,
        FiltersRequest,
        AddToCartRequest,
        UpdateQuantityRequest,
        SlideRequest,
        PromptRequest
    ))
)]
pub struct ApiDoc;

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .route("/api/state", get(state::state_handler))
        .route("/api/home", get(catalog::home_handler))
        .route("/api/products", get(catalog::products_handler))
        .route("/api/portfolio", get(catalog::portfolio_handler))
        .route("/api/filters", post(catalog::filters_handler))
        .route("/api/catalog/reload", post(catalog::reload_catalog_handler))
        .route("/api/navigate", post(navigation::navigate_handler))
        .route("/api/legal", post(navigation::legal_handler))
        .route("/api/search/open", post(navigation::open_search_handler))
        .route("/api/search/close", post(navigation::close_search_handler))
        .route("/api/search/submit", post(navigation::submit_search_handler))
        .route("/api/cart/items", post(cart::add_to_cart_handler))
        .route("/api/cart/items/:id", delete(cart::remove_from_cart_handler))
        .route("/api/cart/items/:id/quantity", post(cart::update_quantity_handler))
        .route("/api/cart/open", post(cart::open_cart_handler))
        .route("/api/cart/close", post(cart::close_cart_handler))
        .route("/api/checkout", post(cart::checkout_handler))
        .route("/api/projects/close", post(showcase::close_project_handler))
        .route("/api/projects/similar", post(showcase::similar_project_handler))
        .route("/api/projects/:id/open", post(showcase::open_project_handler))
        .route("/api/slides/hero", post(showcase::hero_slide_handler))
        .route("/api/slides/portfolio", post(showcase::portfolio_slide_handler))
        .route("/api/assistant/prompt", post(assistant::set_prompt_handler))
        .route("/api/assistant/submit", post(assistant::submit_prompt_handler))
        .with_state(app_state)
}
