use crate::app::reducer::StorefrontAction;
use crate::transport::http::handlers::common::{error_response, json_body, ok};
use crate::transport::http::types::{ApiResponse, AppState, SlideRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/projects/{id}/open",
    params(("id" = String, Path, description = "Portfolio item id")),
    responses(
        (status = 200, description = "Project detail overlay opened", body = ApiResponse),
        (status = 404, description = "No such portfolio item", body = ApiResponse)
    )
)]
pub async fn open_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let item = match state.storefront.find_portfolio_item(&id).await {
        Some(item) => item,
        None => {
            return error_response(
                StatusCode::NOT_FOUND,
                format!("Portfolio item '{}' not found", id),
            )
        }
    };
    state.storefront.dispatch(StorefrontAction::OpenProject(item)).await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/projects/close",
    responses((status = 200, description = "Project detail overlay closed", body = ApiResponse))
)]
pub async fn close_project_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.storefront.dispatch(StorefrontAction::CloseProject).await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/projects/similar",
    responses((status = 200, description = "Overlay closed and contact view shown", body = ApiResponse))
)]
pub async fn similar_project_handler(State(state): State<AppState>) -> impl IntoResponse {
    state
        .storefront
        .dispatch(StorefrontAction::StartSimilarProject)
        .await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/slides/hero",
    request_body = SlideRequest,
    responses(
        (status = 200, description = "Hero slide selected", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn hero_slide_handler(
    State(state): State<AppState>,
    request: Result<Json<SlideRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(request, "{\"index\": 0}") {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    state
        .storefront
        .dispatch(StorefrontAction::SelectHeroSlide(request.index))
        .await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/slides/portfolio",
    request_body = SlideRequest,
    responses(
        (status = 200, description = "Portfolio hero slide selected", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn portfolio_slide_handler(
    State(state): State<AppState>,
    request: Result<Json<SlideRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(request, "{\"index\": 0}") {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    state
        .storefront
        .dispatch(StorefrontAction::SelectPortfolioSlide(request.index))
        .await;
    ok(state.storefront.snapshot().await)
}
