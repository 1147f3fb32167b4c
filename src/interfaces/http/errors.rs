use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::StorefrontError;

pub fn error_to_response(err: StorefrontError) -> Response {
    match err {
        StorefrontError::ItemNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        StorefrontError::InvalidQuantity(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_quantity", err.to_string())
        }
        StorefrontError::ValidationError(_) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", err.to_string())
        }
        StorefrontError::CsvError(_) | StorefrontError::IoError(_) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
