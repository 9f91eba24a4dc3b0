/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the shape the original clients
 * expect:
 * ```json
 * {
 *   "message": "Email or username already exists"
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// Server-side failures are logged with full detail here; the response
    /// body only ever carries the client-facing message.
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Database(err) if status == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("Database error: {:?}", err);
            }
            ApiError::Io(err) => {
                tracing::error!("I/O error: {:?}", err);
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
            _ => {
                tracing::warn!("Request rejected ({}): {}", status, self);
            }
        }

        let body = Json(serde_json::json!({ "message": self.message() }));
        (status, body).into_response()
    }
}
