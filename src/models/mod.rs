// Models module for the cluster plugin
// Wire types for cluster records, requests and the plugin descriptor

pub mod cluster;
pub mod plugin;

pub use cluster::*;
pub use plugin::*;
