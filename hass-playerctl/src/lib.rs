//! # hass-playerctl
//!
//! Loopback HTTP bridge for media transport control.
//!
//! `GET /health` answers `ok`. `POST /{action}` runs `playerctl {action}` for
//! one of `play`, `pause`, `next`, `previous`, `play-pause` and relays the
//! result: 200 with stdout, 502 with stderr, or 504 after a 5 second timeout.
//! Bodies are always `text/plain`.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod action;
pub mod api;
pub mod config;
pub mod error;
pub mod playerctl;
pub mod server;

pub use action::Action;
pub use error::{Error, Result};
pub use playerctl::{Outcome, Playerctl};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Runner for the external utility
    pub playerctl: Arc<Playerctl>,
}

impl AppState {
    /// Create new application state
    pub fn new(playerctl: Playerctl) -> Self {
        Self {
            playerctl: Arc::new(playerctl),
        }
    }
}

/// Build application router
///
/// No named routes: matching is done by [`api::dispatch`] on the raw request
/// target, query string included, so `/health?x=1` is not `/health`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(api::dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
