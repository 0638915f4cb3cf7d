use crate::app::reducer::StorefrontAction;
use crate::transport::http::handlers::common::{error_response, json_body, ok};
use crate::transport::http::types::{AddToCartRequest, ApiResponse, AppState, UpdateQuantityRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/cart/items",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Product added (merged into an existing line if present)", body = ApiResponse),
        (status = 404, description = "No such product in the catalog", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    request: Result<Json<AddToCartRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(request, "{\"productId\": \"...\"}") {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let product = match state.storefront.find_product(&request.product_id).await {
        Some(p) => p,
        None => {
            return error_response(
                StatusCode::NOT_FOUND,
                format!("Product '{}' is not in the catalog", request.product_id),
            )
        }
    };

    state.storefront.add_to_cart(product).await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    delete,
    path = "/api/cart/items/{id}",
    params(("id" = String, Path, description = "Product id of the cart line")),
    responses((status = 200, description = "Line removed (no-op when absent)", body = ApiResponse))
)]
pub async fn remove_from_cart_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    state.storefront.remove_from_cart(id).await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/cart/items/{id}/quantity",
    params(("id" = String, Path, description = "Product id of the cart line")),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity changed, floored at 1", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn update_quantity_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<UpdateQuantityRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(request, "{\"delta\": -1}") {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    state.storefront.update_quantity(id, request.delta).await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/cart/open",
    responses((status = 200, description = "Cart panel opened", body = ApiResponse))
)]
pub async fn open_cart_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.storefront.dispatch(StorefrontAction::OpenCart).await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/cart/close",
    responses((status = 200, description = "Cart panel closed", body = ApiResponse))
)]
pub async fn close_cart_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.storefront.dispatch(StorefrontAction::CloseCart).await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/checkout",
    responses((status = 200, description = "Order accepted, cart emptied; the success flag clears after a delay", body = ApiResponse))
)]
pub async fn checkout_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.storefront.checkout().await;
    ok(state.storefront.snapshot().await)
}
