//! HTTP server setup
//!
//! Binds the loopback listener and serves the router until a shutdown
//! signal arrives.

use std::future::Future;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::playerctl::Playerctl;
use crate::{build_router, AppState};

/// Bind the listener for `config`
///
/// The address always comes from [`Config::bind_addr`], which is loopback.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.bind_addr();
    TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Http(format!("Failed to bind to {}: {}", addr, e)))
}

/// Serve requests on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::Http(format!("Server error: {}", e)))
}

/// Run the bridge with `config` until SIGINT or SIGTERM
pub async fn run(config: Config) -> Result<()> {
    let listener = bind(&config).await?;
    let addr = listener.local_addr()?;
    info!("hass-playerctl listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);
    info!("Using {}", config.playerctl.display());

    let state = AppState::new(Playerctl::new(config.playerctl));
    serve(listener, state, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
