use chrono::Utc;
use serde_json::{json, Value};

use kubestellar_cluster_plugin::models::{
    ClusterRecord, ClusterStatus, DetachRequest, OnboardRequest, PluginMetadata, StatusSummary,
};

fn sample_record() -> ClusterRecord {
    ClusterRecord {
        name: "prod-cluster-east".to_string(),
        status: ClusterStatus::Ready,
        message: "Production cluster - East region".to_string(),
        last_updated: Utc::now(),
        node_count: 5,
        namespace: "kubestellar-system".to_string(),
        region: "us-east-1".to_string(),
    }
}

#[test]
fn test_cluster_record_uses_camel_case_wire_names() {
    let value = serde_json::to_value(sample_record()).unwrap();

    assert_eq!(value["clusterName"], "prod-cluster-east");
    assert_eq!(value["status"], "ready");
    assert_eq!(value["nodeCount"], 5);
    assert_eq!(value["namespace"], "kubestellar-system");
    assert_eq!(value["region"], "us-east-1");
    assert!(value["lastUpdated"].is_string());
    assert!(value.get("name").is_none());
}

#[test]
fn test_cluster_record_omits_empty_namespace_and_region() {
    let mut record = sample_record();
    record.namespace.clear();
    record.region.clear();

    let value = serde_json::to_value(record).unwrap();
    assert!(value.get("namespace").is_none());
    assert!(value.get("region").is_none());
}

#[test]
fn test_unexpected_status_deserializes_as_unknown() {
    let status: ClusterStatus = serde_json::from_value(json!("degraded")).unwrap();
    assert_eq!(status, ClusterStatus::Unknown);

    let status: ClusterStatus = serde_json::from_value(json!("failed")).unwrap();
    assert_eq!(status, ClusterStatus::Failed);
    assert_eq!(status.to_string(), "failed");
}

#[test]
fn test_summary_folds_every_status() {
    let mut records = Vec::new();
    for status in [
        ClusterStatus::Ready,
        ClusterStatus::Pending,
        ClusterStatus::Pending,
        ClusterStatus::Failed,
        ClusterStatus::Unknown,
    ] {
        let mut record = sample_record();
        record.status = status;
        records.push(record);
    }

    let summary = StatusSummary::from_records(&records);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.ready, 1);
    assert_eq!(summary.pending, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.unknown, 1);

    let empty = StatusSummary::from_records(&Vec::<ClusterRecord>::new());
    assert_eq!(empty, StatusSummary::default());
}

#[test]
fn test_onboard_request_optional_fields() {
    let request: OnboardRequest =
        serde_json::from_value(json!({ "clusterName": "edge" })).unwrap();
    assert_eq!(request.cluster_name, "edge");
    assert!(request.namespace.is_none());
    assert!(request.region.is_none());
    assert!(!request.auto_setup);

    let request: OnboardRequest = serde_json::from_value(json!({})).unwrap();
    assert!(request.cluster_name.is_empty());
}

#[test]
fn test_detach_request_flags() {
    let request: DetachRequest = serde_json::from_value(json!({
        "clusterName": "edge",
        "forceDetach": true,
        "cleanupData": true
    }))
    .unwrap();
    assert_eq!(request.cluster_name, "edge");
    assert!(request.force_detach);
    assert!(request.cleanup_data);
}

#[test]
fn test_plugin_metadata_descriptor() {
    let metadata = PluginMetadata::describe();

    assert_eq!(metadata.id, "kubestellar-demo-plugin");
    assert_eq!(metadata.endpoints.len(), 5);
    assert_eq!(metadata.handler_names()[2], "OnboardClusterHandler");
    assert_eq!(
        metadata.permissions,
        vec!["cluster.read", "cluster.write", "namespace.create"]
    );
    assert_eq!(metadata.compatibility["kubestellar"], ">=0.21.0");

    let value: Value = serde_json::to_value(&metadata).unwrap();
    assert_eq!(value["endpoints"][3]["path"], "/detach");
    assert_eq!(value["endpoints"][3]["method"], "POST");
}
