//! HTTP API handlers for hass-playerctl

pub mod control;
pub mod error;
pub mod health;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

pub use control::dispatch;
pub use error::{ApiError, ApiResult};
pub use health::health;

/// Build a `text/plain` response with a raw body
pub(crate) fn text_response(status: StatusCode, body: impl Into<Body>) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain")], body.into()).into_response()
}
