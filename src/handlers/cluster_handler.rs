use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::{
    error::RegistryError,
    models::{DetachRequest, OnboardRequest},
    AppState,
};

/// GET /clusters
pub async fn list_clusters(State(state): State<AppState>) -> Json<Value> {
    info!("📋 ListClustersHandler called");

    let clusters = state.registry.list();
    Json(json!({
        "count": clusters.len(),
        "clusters": clusters,
        "timestamp": Utc::now()
    }))
}

/// POST /onboard
///
/// 400 on a malformed body or missing `clusterName`, 409 if the name is taken.
pub async fn onboard_cluster(
    State(state): State<AppState>,
    payload: Result<Json<OnboardRequest>, JsonRejection>,
) -> Result<Json<Value>, RegistryError> {
    info!("🚀 OnboardClusterHandler called");

    let Json(request) = payload.map_err(reject)?;
    let name = required_name(&request.cluster_name)?;

    let record = state.registry.onboard(
        name,
        request.namespace.as_deref(),
        request.region.as_deref(),
    )?;

    info!(
        "✅ Cluster '{}' onboarding started (autoSetup={})",
        record.name, request.auto_setup
    );
    Ok(Json(json!({
        "message": format!("Cluster '{}' onboarding started", record.name),
        "clusterName": record.name,
        "status": record.status,
        "namespace": record.namespace,
        "region": record.region,
        "nodeCount": record.node_count,
        "timestamp": Utc::now()
    })))
}

/// POST /detach
///
/// 400 on a malformed body or missing `clusterName`, 404 if the name is unknown.
pub async fn detach_cluster(
    State(state): State<AppState>,
    payload: Result<Json<DetachRequest>, JsonRejection>,
) -> Result<Json<Value>, RegistryError> {
    info!("🗑️ DetachClusterHandler called");

    let Json(request) = payload.map_err(reject)?;
    let name = required_name(&request.cluster_name)?;

    let previous_status = state.registry.detach(name)?;

    info!(
        "✅ Cluster '{}' detached successfully (force={}, cleanupData={})",
        name, request.force_detach, request.cleanup_data
    );
    Ok(Json(json!({
        "message": format!("Cluster '{}' detached successfully", name),
        "clusterName": name,
        "previousStatus": previous_status,
        "cleanupData": request.cleanup_data,
        "timestamp": Utc::now()
    })))
}

fn reject(rejection: JsonRejection) -> RegistryError {
    warn!("Rejected request body: {}", rejection.body_text());
    RegistryError::invalid_input(rejection.body_text())
}

fn required_name(name: &str) -> Result<&str, RegistryError> {
    let name = name.trim();
    if name.is_empty() {
        warn!("Rejected request: clusterName is missing");
        return Err(RegistryError::invalid_input("clusterName is required"));
    }
    Ok(name)
}
