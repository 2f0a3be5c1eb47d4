//! Error types for registry operations

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors returned by [`crate::services::ClusterRegistry`] and the handlers on top of it
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Onboarding a name that is already registered
    #[error("cluster '{0}' already exists")]
    AlreadyExists(String),

    /// Detaching or updating a name that is not registered
    #[error("cluster '{0}' not found")]
    NotFound(String),

    /// Request could not be bound (missing name, malformed body)
    #[error("invalid request: {0}")]
    InvalidInput(String),

    #[error("plugin not initialized")]
    NotInitialized,
}

impl RegistryError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::AlreadyExists(_) => StatusCode::CONFLICT,
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RegistryError::NotInitialized => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let body = match &self {
            RegistryError::AlreadyExists(name) => json!({
                "error": "Cluster already exists",
                "cluster": name
            }),
            RegistryError::NotFound(name) => json!({
                "error": "Cluster not found",
                "cluster": name
            }),
            RegistryError::InvalidInput(details) => json!({
                "error": "Invalid request",
                "details": details
            }),
            RegistryError::NotInitialized => json!({
                "error": "Service Unavailable",
                "message": self.to_string()
            }),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
