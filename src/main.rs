use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kubestellar_cluster_plugin::{build_router, AppState, ClusterRegistry, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first so RUST_LOG drives the subscriber
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {:#}", e);
            return Err(e.into());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .init();

    info!("🚀 Starting KubeStellar cluster plugin...");
    info!("✅ Configuration loaded");

    let registry = Arc::new(ClusterRegistry::from_config(&config));
    if !registry.initialize() {
        warn!("⚠️ Registry was already initialized");
    }

    let app_state = AppState::new(config.clone(), Arc::clone(&registry));
    info!(
        "✅ Plugin '{}' v{} registered handlers: {:?}",
        app_state.metadata.id,
        app_state.metadata.version,
        app_state.metadata.handler_names()
    );

    let app = build_router(app_state);

    let listener = match tokio::net::TcpListener::bind(&config.server_address).await {
        Ok(listener) => {
            info!("🌐 Server listening on {}", config.server_address);
            listener
        }
        Err(e) => {
            eprintln!("❌ Failed to bind to {}: {}", config.server_address, e);
            return Err(e.into());
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("❌ Server error: {}", e);
        return Err(e.into());
    }

    registry.cleanup();
    info!("✅ Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("⚠️ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("🧹 Shutdown signal received");
}
