use crate::transport::http::handlers::common::{json_body, ok};
use crate::transport::http::types::{ApiResponse, AppState, PromptRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/assistant/prompt",
    request_body = PromptRequest,
    responses(
        (status = 200, description = "Prompt text stored", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn set_prompt_handler(
    State(state): State<AppState>,
    request: Result<Json<PromptRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(request, "{\"prompt\": \"...\"}") {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    state.storefront.set_prompt(request.prompt).await;
    ok(state.storefront.read(|s| s.assistant().clone()).await)
}

/// Fires the request in the background; poll `/api/state` for the result.
#[utoipa::path(
    post,
    path = "/api/assistant/submit",
    responses((status = 200, description = "Submitted (or short-circuited for a blank prompt)", body = ApiResponse))
)]
pub async fn submit_prompt_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.storefront.submit_prompt().await;
    ok(state.storefront.read(|s| s.assistant().clone()).await)
}
