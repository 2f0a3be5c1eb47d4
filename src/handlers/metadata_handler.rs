use axum::{extract::State, response::Json};

use crate::{models::PluginMetadata, AppState};

/// GET /metadata
pub async fn get_metadata(State(state): State<AppState>) -> Json<PluginMetadata> {
    Json(state.metadata.as_ref().clone())
}
