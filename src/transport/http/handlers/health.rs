use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse),
        (status = 503, description = "Service has been shut down", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    if state.storefront.is_torn_down() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                success: false,
                data: Some(serde_json::json!({ "status": "shut_down" })),
                error: Some("storefront has been shut down".to_string()),
            }),
        );
    }

    let catalog_loading = state.storefront.read(|s| s.catalog().is_loading()).await;
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(serde_json::json!({
                "status": "ok",
                "catalogLoading": catalog_loading
            })),
            error: None,
        }),
    )
}
