use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static descriptor handed to the hosting runtime at registration time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginMetadata {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub endpoints: Vec<EndpointConfig>,
    pub dependencies: Vec<String>,
    pub permissions: Vec<String>,
    pub compatibility: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndpointConfig {
    pub path: String,
    pub method: String,
    pub handler: String,
    pub description: String,
}

impl EndpointConfig {
    fn new(path: &str, method: &str, handler: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            handler: handler.to_string(),
            description: description.to_string(),
        }
    }
}

impl PluginMetadata {
    pub fn describe() -> Self {
        Self {
            id: "kubestellar-demo-plugin".to_string(),
            name: "KubeStellar Demo Plugin".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Demonstration plugin for KubeStellar cluster management".to_string(),
            author: "CNCF LFX Mentee".to_string(),
            endpoints: vec![
                EndpointConfig::new("/status", "GET", "GetClusterStatusHandler", "Get plugin status"),
                EndpointConfig::new("/clusters", "GET", "ListClustersHandler", "List clusters"),
                EndpointConfig::new("/onboard", "POST", "OnboardClusterHandler", "Onboard cluster"),
                EndpointConfig::new("/detach", "POST", "DetachClusterHandler", "Detach cluster"),
                EndpointConfig::new("/health", "GET", "HealthCheckHandler", "Health check"),
            ],
            dependencies: vec!["kubectl".to_string(), "clusteradm".to_string()],
            permissions: vec![
                "cluster.read".to_string(),
                "cluster.write".to_string(),
                "namespace.create".to_string(),
            ],
            compatibility: BTreeMap::from([
                ("kubestellar".to_string(), ">=0.21.0".to_string()),
                ("kubernetes".to_string(), ">=1.24".to_string()),
                ("rust".to_string(), ">=1.75".to_string()),
            ]),
        }
    }

    /// Handler identifiers declared by the endpoints, in declaration order
    pub fn handler_names(&self) -> Vec<&str> {
        self.endpoints.iter().map(|e| e.handler.as_str()).collect()
    }
}
