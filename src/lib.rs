// KubeStellar cluster plugin library
// Public modules are exported for the binary and the integration tests

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::Config;
pub use error::RegistryError;
pub use models::PluginMetadata;
pub use services::ClusterRegistry;

use handlers::{cluster_handler, health_handler, metadata_handler, status_handler};

// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: Arc<ClusterRegistry>,
    pub metadata: Arc<PluginMetadata>,
}

impl AppState {
    pub fn new(config: Config, registry: Arc<ClusterRegistry>) -> Self {
        Self {
            config,
            registry,
            metadata: Arc::new(PluginMetadata::describe()),
        }
    }
}

/// Routes for the five plugin endpoints plus the metadata descriptor
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_handler::get_cluster_status))
        .route("/clusters", get(cluster_handler::list_clusters))
        .route("/onboard", post(cluster_handler::onboard_cluster))
        .route("/detach", post(cluster_handler::detach_cluster))
        .route("/health", get(health_handler::health_check))
        .route("/metadata", get(metadata_handler::get_metadata))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
