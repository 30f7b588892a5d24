//! Transport control dispatch
//!
//! Every request lands here. Matching uses the raw request target (path plus
//! query string, undecoded). `GET /health` is the liveness probe, other GET
//! targets are 404, and POST targets are parsed as actions.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::Response,
};
use tracing::{error, info, warn};

use super::error::{ApiError, ApiResult};
use super::health::health;
use super::text_response;
use crate::action::Action;
use crate::playerctl::Outcome;
use crate::AppState;

/// Catch-all handler for every target and method
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> ApiResult<Response> {
    let target = request_target(&uri);
    match method {
        Method::GET if target == "/health" => Ok(health().await),
        Method::GET => Err(ApiError::NotFound),
        Method::POST => run_action(&state, target).await,
        // HEAD included: only GET and POST are served
        other => Err(ApiError::UnsupportedMethod(other)),
    }
}

/// Path and query exactly as sent
fn request_target(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

/// POST /{action}
///
/// The token is the raw target with its leading slashes removed. It is not
/// percent-decoded and keeps any query string, so `/play%2Dpause` and
/// `/play?x=1` are rejected rather than run.
async fn run_action(state: &AppState, target: &str) -> ApiResult<Response> {
    let action: Action = target.trim_start_matches('/').parse()?;

    let outcome = match state.playerctl.run(action).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(
                "Failed to run {} {}: {}",
                state.playerctl.program().display(),
                action,
                e
            );
            return Err(ApiError::Upstream(Vec::new()));
        }
    };

    match outcome {
        Outcome::Completed { stdout } => {
            info!("playerctl {} succeeded", action);
            let body = if stdout.is_empty() {
                b"ok".to_vec()
            } else {
                stdout
            };
            Ok(text_response(StatusCode::OK, body))
        }
        Outcome::Failed { code, stderr } => {
            warn!(
                "playerctl {} failed (exit code {:?}): {}",
                action,
                code,
                String::from_utf8_lossy(&stderr).trim()
            );
            Err(ApiError::Upstream(stderr))
        }
        Outcome::TimedOut => {
            warn!(
                "playerctl {} timed out after {:?}",
                action,
                state.playerctl.timeout()
            );
            Err(ApiError::Timeout)
        }
    }
}
