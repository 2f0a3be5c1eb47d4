use axum::{extract::State, response::Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::{services::format_uptime, AppState};

/// GET /health
///
/// Always answers 200; `status` says whether the registry is initialized
/// and has been up for a non-zero duration.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let report = state.registry.health_report();

    Json(json!({
        "status": report.status,
        "uptime": format_uptime(report.uptime),
        "clusters": report.clusters,
        "ready": report.ready,
        "timestamp": Utc::now(),
        "checks": {
            "initialized": report.initialized,
            "uptime_ok": !report.uptime.is_zero(),
            "clusters_loaded": report.clusters > 0,
            "ready_clusters": report.ready
        }
    }))
}
