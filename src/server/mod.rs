//! HTTP relay service
//!
//! Exposes the read-only `/api` routes, delegating each one to the
//! [`GitHubProvider`](crate::di::GitHubProvider) held by the
//! [`ServiceContainer`]. Requests share no mutable state; an upstream call
//! suspends only the request that issued it.

pub mod error;
pub mod layers;
pub mod routes;

use crate::core::{RelayError, RelayResult};
use crate::di::ServiceContainer;
use axum::{routing::get, Router};
use std::future::Future;
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use error::ApiError;

pub fn build_router(state: ServiceContainer) -> Router {
    let router = Router::new()
        .route("/api/health", get(routes::health_handler))
        .route("/api/search/users", get(routes::search_users_handler))
        .route("/api/users/{username}", get(routes::user_handler))
        .route("/api/users/{username}/repos", get(routes::user_repos_handler))
        .route("/api/repos/{owner}/{repo}", get(routes::repo_handler))
        .route(
            "/api/repos/{owner}/{repo}/commits",
            get(routes::repo_commits_handler),
        )
        .fallback(routes::not_found_handler);

    layers::with_security_headers(router)
        .layer(layers::cors_layer(state.config()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM
pub async fn serve(state: ServiceContainer) -> RelayResult<()> {
    let address = state.config().socket_addr()?;
    info!("Binding to {address}");

    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| RelayError::Server(format!("Failed to bind {}: {}", address, e)))?;

    serve_on(listener, state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_on<F>(
    listener: TcpListener,
    state: ServiceContainer,
    shutdown: F,
) -> RelayResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr()?;
    if !state.config().has_token() {
        warn!("GITHUB_TOKEN not set, upstream requests are anonymous and rate limited");
    }
    info!("Server running on http://{local}/api/health");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| RelayError::Server(format!("Server error: {}", e)))?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
