//! Health check endpoint

use axum::{http::StatusCode, response::Response};

use super::text_response;

/// GET /health
///
/// Liveness probe, reached only for the exact target `/health`. Never touches
/// playerctl.
pub async fn health() -> Response {
    text_response(StatusCode::OK, "ok")
}
