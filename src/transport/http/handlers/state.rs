use crate::transport::http::handlers::common::ok;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/state",
    responses((status = 200, description = "Full storefront snapshot plus the document head", body = ApiResponse))
)]
pub async fn state_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.storefront.snapshot().await;
    ok(json!({
        "storefront": snapshot,
        "document": state.document.head(),
    }))
}
