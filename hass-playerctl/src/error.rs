//! Error types for hass-playerctl
//!
//! Startup and configuration failures. Per-request failures never leave the
//! handler; they are mapped to HTTP responses by [`crate::api::ApiError`].

use thiserror::Error;

/// Main error type for hass-playerctl
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file, environment or argument errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP server errors
    #[error("HTTP server error: {0}")]
    Http(String),
}

/// Convenience Result type using hass-playerctl Error
pub type Result<T> = std::result::Result<T, Error>;
