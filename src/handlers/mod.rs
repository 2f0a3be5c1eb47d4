pub mod cluster_handler;
pub mod health_handler;
pub mod metadata_handler;
pub mod status_handler;
