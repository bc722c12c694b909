//! HTTP mapping for store errors.

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use portfolio_core::Error;

/// Store error carried out of a handler.
///
/// `NotFound` becomes 404; anything else is a 500. The body is a
/// structured JSON object so clients never have to parse prose:
///
/// ```json
/// {"error": {"category": "not_found", "message": "Project not found: 7"}}
/// ```
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, category) = match &self.0 {
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            Error::Config { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "configuration"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = serde_json::json!({
            "error": {
                "category": category,
                "message": self.0.to_string(),
            }
        });

        (status, Json(body)).into_response()
    }
}
