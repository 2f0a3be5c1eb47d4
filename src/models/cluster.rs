use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_NAMESPACE: &str = "kubestellar-system";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRecord {
    #[serde(rename = "clusterName")]
    pub name: String,
    pub status: ClusterStatus,
    pub message: String,
    pub last_updated: DateTime<Utc>,
    pub node_count: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClusterStatus {
    Pending,
    Ready,
    Failed,
    // Catch-all so unexpected values deserialize instead of failing
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClusterStatus::Pending => "pending",
            ClusterStatus::Ready => "ready",
            ClusterStatus::Failed => "failed",
            ClusterStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Per-status record counts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub ready: usize,
    pub pending: usize,
    pub failed: usize,
    pub unknown: usize,
}

impl StatusSummary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ClusterRecord>,
    {
        records.into_iter().fold(Self::default(), |mut acc, record| {
            acc.total += 1;
            match record.status {
                ClusterStatus::Ready => acc.ready += 1,
                ClusterStatus::Pending => acc.pending += 1,
                ClusterStatus::Failed => acc.failed += 1,
                ClusterStatus::Unknown => acc.unknown += 1,
            }
            acc
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardRequest {
    #[serde(default)]
    pub cluster_name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub auto_setup: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetachRequest {
    #[serde(default)]
    pub cluster_name: String,
    #[serde(default)]
    pub force_detach: bool,
    #[serde(default)]
    pub cleanup_data: bool,
}
