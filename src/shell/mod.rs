// Composition root for the cart service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the cart store and wire it into the HTTP and GraphQL surfaces.
// - Own the process lifecycle: logging, binding, graceful shutdown.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::modules::cart::adapters::outbound::cart_store::CartStore;
use crate::modules::cart::adapters::outbound::cart_store_in_memory::InMemoryCartStore;
use crate::shared::infrastructure::event_observer::TracingEventObserver;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;

/// Builds the initialized in-memory store and the state handed to handlers.
pub async fn build_state() -> AppState {
    let cart_store = Arc::new(InMemoryCartStore::with_observer(Arc::new(
        TracingEventObserver::new(),
    )));
    cart_store.initialize().await;
    AppState::new(cart_store)
}

pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let state = build_state().await;
    let app = http::router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Cart service start");
    tracing::info!("Listening on: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Cart service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
