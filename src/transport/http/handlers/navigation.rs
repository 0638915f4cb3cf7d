use crate::app::reducer::StorefrontAction;
use crate::domain::navigation::{LegalSection, View};
use crate::transport::http::handlers::common::{error_response, json_body, ok, parse_field};
use crate::transport::http::types::{ApiResponse, AppState, LegalSectionRequest, NavigateRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/navigate",
    request_body = NavigateRequest,
    responses(
        (status = 200, description = "Navigated", body = ApiResponse),
        (status = 400, description = "Unknown view or label", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn navigate_handler(
    State(state): State<AppState>,
    request: Result<Json<NavigateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(request, "{\"view\": \"products\"} or {\"label\": \"Creative Designs\"}") {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let view = match (request.label, request.view) {
        (Some(label), _) => match View::from_label(&label) {
            Some(v) => v,
            None => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("No view for label '{}'", label),
                )
            }
        },
        (None, Some(raw)) => match parse_field::<View>(&raw) {
            Ok(v) => v,
            Err(resp) => return resp,
        },
        (None, None) => {
            return error_response(StatusCode::BAD_REQUEST, "Either 'view' or 'label' is required")
        }
    };

    state.storefront.navigate(view).await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/legal",
    request_body = LegalSectionRequest,
    responses(
        (status = 200, description = "Legal section selected; the legal view is now active", body = ApiResponse),
        (status = 400, description = "Unknown section", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn legal_handler(
    State(state): State<AppState>,
    request: Result<Json<LegalSectionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(request, "{\"section\": \"terms\"}") {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let section = match parse_field::<LegalSection>(&request.section) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    state.storefront.select_legal_section(section).await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/search/open",
    responses((status = 200, description = "Search overlay opened", body = ApiResponse))
)]
pub async fn open_search_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.storefront.dispatch(StorefrontAction::OpenSearch).await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/search/close",
    responses((status = 200, description = "Search overlay closed", body = ApiResponse))
)]
pub async fn close_search_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.storefront.dispatch(StorefrontAction::CloseSearch).await;
    ok(state.storefront.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/api/search/submit",
    responses((status = 200, description = "Overlay closed and product listing shown", body = ApiResponse))
)]
pub async fn submit_search_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.storefront.dispatch(StorefrontAction::SubmitSearch).await;
    ok(state.storefront.snapshot().await)
}
