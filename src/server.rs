//! HTTP server wiring
//!
//! Builds the Axum router over the shared state and runs it with graceful
//! shutdown on Ctrl+C.

use std::net::SocketAddr;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;
use crate::web::handlers::api;

/// Main server struct owning the shared state.
#[derive(Clone)]
pub struct InventoryServer {
    state: AppState,
}

impl InventoryServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Build the Axum router with all routes.
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/inventory", get(api::get_inventory))
            .route("/health", get(api::health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive()) // Allow CORS for demo frontends
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Start the HTTP server and block until shutdown.
    pub async fn run(&self, addr: SocketAddr) -> ServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        info!("🌐 Inventory server listening on http://{addr}");

        let server_task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                error!("Server error: {e}");
            }
        });

        tokio::select! {
            _ = server_task => {
                info!("HTTP server task completed");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal");
            }
        }

        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
