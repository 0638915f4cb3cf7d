use crate::transport::http::types::ApiResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> Response {
    match serde_json::to_value(data) {
        Ok(value) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(value),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to serialize response: {}", e),
        ),
    }
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }),
    )
        .into_response()
}

/// Unwraps a JSON body, turning a rejection into a 422 envelope that names
/// the expected shape.
pub fn json_body<T>(request: Result<Json<T>, JsonRejection>, expected: &str) -> Result<T, Response> {
    match request {
        Ok(Json(body)) => Ok(body),
        Err(e) => Err(error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Invalid JSON body: {} (expected: {})", e, expected),
        )),
    }
}

/// Parses an enumerated value sent as a string, as a 400 on failure.
pub fn parse_field<T>(raw: &str) -> Result<T, Response>
where
    T: std::str::FromStr<Err = String>,
{
    raw.trim()
        .parse()
        .map_err(|e: String| error_response(StatusCode::BAD_REQUEST, e))
}
