//! JSON response bodies for the intake endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use formalogix_shared::AppError;

/// `200 {"success": true, "message": ...}`.
pub fn success(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": message
        })),
    )
        .into_response()
}

/// `{"success": false, "error": ...}` with the status of `err`.
///
/// Server-side detail never reaches the body; `generic` stands in for it.
pub fn failure(err: &AppError, generic: &str) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "success": false,
            "error": err.public_message(generic)
        })),
    )
        .into_response()
}
