//! Curio Server - Marketplace HTTP service.
//!
//! This binary serves the marketplace JSON API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request/response with bearer-token auth
//! - Volatile in-memory storage behind a repository seam
//! - Domain services (auth, catalog, trade, admin) constructed per-request
//!   over the shared store handle

#![cfg_attr(not(test), forbid(unsafe_code))]

use curio_server::config::ServerConfig;
use curio_server::routes;
use curio_server::seed;
use curio_server::state::AppState;
use curio_server::store::Store;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "curio_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // All state is volatile; the store is rebuilt and reseeded on every start
    let store = Store::new();
    let admin = seed::bootstrap_admin(&store, &config)
        .expect("Failed to create administrator account");
    tracing::info!(admin_id = %admin.id, "administrator account ready");

    if config.seed_demo {
        seed::seed_demo(&store).expect("Failed to seed demo data");
        tracing::info!("demo data seeded");
    }

    // Build application state and router
    let state = AppState::new(config.clone(), store);
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("curio server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
