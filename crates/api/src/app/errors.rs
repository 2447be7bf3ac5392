use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use bankledger_core::DomainError;

/// Map a domain failure to its HTTP response.
///
/// Business rule violations and bad input share 400; only storage failures are 500.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    if err.is_client_error() {
        json_error(StatusCode::BAD_REQUEST, err.to_string())
    } else {
        tracing::error!("internal error: {err}");
        json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}
