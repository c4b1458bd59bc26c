//! HTTP API server

pub mod handlers;
pub mod response;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{delete, get, put};
use tokio::net::TcpListener;
use tracing::info;

use crate::service::PodService;

/// Shared state for handlers
#[derive(Clone)]
pub struct AppState {
    pub pods: Arc<PodService>,
}

impl AppState {
    pub fn new(pods: PodService) -> Self {
        Self {
            pods: Arc::new(pods),
        }
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/api/k8s/pods", get(handlers::get_pods))
        .route("/api/k8s/pods/detail", get(handlers::get_pod_detail))
        .route("/api/k8s/pod/del", delete(handlers::delete_pod))
        .route("/api/k8s/pod/update", put(handlers::update_pod))
        .route("/api/k8s/pod/container", get(handlers::get_pod_containers))
        .route("/api/k8s/pod/log", get(handlers::get_pod_log))
        .route("/api/k8s/pod/numnp", get(handlers::get_pod_num_per_namespace))
        .with_state(state)
}

/// Serve `app` on `addr` until Ctrl-C
pub async fn serve(addr: SocketAddr, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(addr = %addr, "Starting HTTP API server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
