use axum::{extract::State, response::Json};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use crate::{services::format_uptime, AppState};

/// GET /status
/// Plugin identity, uptime, every tracked cluster and per-status counts
pub async fn get_cluster_status(State(state): State<AppState>) -> Json<Value> {
    info!("📊 GetClusterStatusHandler called");

    let report = state.registry.status_report();
    let metadata = state.metadata.as_ref();

    info!("✅ Returning cluster status: {} clusters", report.clusters.len());
    Json(json!({
        "plugin": metadata.name,
        "version": metadata.version,
        "author": metadata.author,
        "uptime": format_uptime(report.uptime),
        "timestamp": Utc::now(),
        "clusters": report.clusters,
        "summary": report.summary,
        "metadata": metadata
    }))
}
