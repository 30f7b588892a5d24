//! Request-level errors and their HTTP mapping
//!
//! Every variant renders as a short `text/plain` body; none of them is ever
//! empty.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::text_response;
use crate::action::UnknownAction;

/// Body sent with a 502 when playerctl wrote nothing to stderr
pub const FAILED_BODY: &str = "playerctl failed";

/// Body sent with a 504
pub const TIMEOUT_BODY: &str = "playerctl timeout";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// POST path is not an accepted action (404); carries the raw token
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// GET path other than /health (404)
    #[error("not found")]
    NotFound,

    /// playerctl exited nonzero or could not be run (502); carries stderr
    #[error("playerctl failed")]
    Upstream(Vec<u8>),

    /// playerctl did not finish in time (504)
    #[error("playerctl timeout")]
    Timeout,

    /// Neither GET nor POST (501)
    #[error("unsupported method: {0}")]
    UnsupportedMethod(Method),
}

impl From<UnknownAction> for ApiError {
    fn from(err: UnknownAction) -> Self {
        ApiError::UnknownAction(err.0)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownAction(_) | ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::UnsupportedMethod(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            // stderr is relayed byte for byte
            ApiError::Upstream(stderr) if !stderr.is_empty() => stderr,
            other => other.to_string().into_bytes(),
        };
        text_response(status, body)
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    async fn render(err: ApiError) -> (StatusCode, String, Vec<u8>) {
        let response = err.into_response();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("content-type header")
            .to_str()
            .unwrap()
            .to_string();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        (status, content_type, body)
    }

    #[tokio::test]
    async fn test_unknown_action_reflects_token() {
        let (status, content_type, body) =
            render(ApiError::UnknownAction("rewind".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type, "text/plain");
        assert_eq!(body, b"unknown action: rewind");
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, _, body) = render(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, b"not found");
    }

    #[tokio::test]
    async fn test_upstream_relays_stderr() {
        let (status, _, body) =
            render(ApiError::Upstream(b"No players found\n".to_vec())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, b"No players found\n");
    }

    #[tokio::test]
    async fn test_upstream_empty_stderr_uses_default() {
        let (status, _, body) = render(ApiError::Upstream(Vec::new())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, FAILED_BODY.as_bytes());
    }

    #[tokio::test]
    async fn test_timeout() {
        let (status, _, body) = render(ApiError::Timeout).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body, TIMEOUT_BODY.as_bytes());
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let (status, _, body) = render(ApiError::UnsupportedMethod(Method::PUT)).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body, b"unsupported method: PUT");
    }
}
