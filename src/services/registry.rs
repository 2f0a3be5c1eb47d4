use chrono::{Duration as ChronoDuration, Utc};
use parking_lot::{Mutex, RwLock};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{RegistryError, Result};
use crate::models::{ClusterRecord, ClusterStatus, StatusSummary, DEFAULT_NAMESPACE};
use crate::services::OnboardingSimulator;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Point-in-time view used by the health endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub initialized: bool,
    pub uptime: Duration,
    pub clusters: usize,
    pub ready: usize,
}

/// Records and their summary taken under a single read lock
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub uptime: Duration,
    pub clusters: Vec<ClusterRecord>,
    pub summary: StatusSummary,
}

#[derive(Debug, Default)]
struct RegistryState {
    initialized: bool,
    started_at: Option<Instant>,
    clusters: HashMap<String, ClusterRecord>,
}

impl RegistryState {
    fn uptime(&self) -> Duration {
        self.started_at.map(|t| t.elapsed()).unwrap_or(Duration::ZERO)
    }
}

/// In-memory registry of onboarded clusters.
///
/// All access to the map goes through one reader/writer lock; callers only
/// ever get clones of the stored records. The registry starts empty and
/// uninitialized, [`initialize`](Self::initialize) seeds it and
/// [`cleanup`](Self::cleanup) tears it down again.
pub struct ClusterRegistry {
    state: RwLock<RegistryState>,
    rng: Mutex<StdRng>,
    simulator: OnboardingSimulator,
    default_namespace: String,
    seed_demo_clusters: bool,
}

impl Default for ClusterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterRegistry {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Registry whose onboarding outcomes are reproducible for a given seed
    pub fn with_rng_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            rng: Mutex::new(rng),
            simulator: OnboardingSimulator::new(),
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            seed_demo_clusters: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut registry = match config.rng_seed {
            Some(seed) => Self::with_rng_seed(seed),
            None => Self::new(),
        };
        registry.default_namespace = config.default_namespace.clone();
        registry.seed_demo_clusters = config.seed_demo_clusters;
        registry
    }

    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    /// Seeds the demo clusters and starts the uptime clock.
    ///
    /// Returns `false` without touching anything if already initialized.
    pub fn initialize(&self) -> bool {
        let mut state = self.state.write();
        if state.initialized {
            warn!("⚠️ Cluster registry already initialized");
            return false;
        }

        state.clusters.clear();
        if self.seed_demo_clusters {
            for record in demo_clusters() {
                state.clusters.insert(record.name.clone(), record);
            }
        }
        state.started_at = Some(Instant::now());
        state.initialized = true;

        info!(
            "✅ Cluster registry initialized with {} clusters",
            state.clusters.len()
        );
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.state.read().initialized
    }

    pub fn uptime(&self) -> Duration {
        self.state.read().uptime()
    }

    pub fn list(&self) -> Vec<ClusterRecord> {
        self.state.read().clusters.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.state.read().clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, name: &str) -> Option<ClusterRecord> {
        self.state.read().clusters.get(name).cloned()
    }

    /// Onboards `name` using the registry's own random source
    pub fn onboard(
        &self,
        name: &str,
        namespace: Option<&str>,
        region: Option<&str>,
    ) -> Result<ClusterRecord> {
        let mut rng = self.rng.lock();
        self.onboard_with_rng(name, namespace, region, &mut *rng)
    }

    /// Onboards `name`, drawing the region and simulated outcome from `rng`.
    ///
    /// Fails with [`RegistryError::AlreadyExists`] without mutating anything
    /// if the name is taken.
    pub fn onboard_with_rng<R: Rng>(
        &self,
        name: &str,
        namespace: Option<&str>,
        region: Option<&str>,
        rng: &mut R,
    ) -> Result<ClusterRecord> {
        let mut state = self.state.write();
        if state.clusters.contains_key(name) {
            warn!("Onboard rejected: cluster '{}' already exists", name);
            return Err(RegistryError::AlreadyExists(name.to_string()));
        }

        let namespace = namespace
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
            .unwrap_or(self.default_namespace.as_str())
            .to_string();
        let region = self.simulator.resolve_region(region, rng);
        let outcome = self.simulator.simulate(&region, rng);

        let record = ClusterRecord {
            name: name.to_string(),
            status: outcome.status,
            message: outcome.message,
            last_updated: Utc::now(),
            node_count: outcome.node_count,
            namespace,
            region,
        };
        state.clusters.insert(name.to_string(), record.clone());

        info!(
            "Cluster '{}' onboarding started: status={}, region={}, nodes={}",
            record.name, record.status, record.region, record.node_count
        );
        Ok(record)
    }

    /// Moves a cluster to a new status.
    ///
    /// Nothing in the request handlers calls this; pending clusters stay
    /// pending unless an embedder drives the transition explicitly.
    pub fn update_status(
        &self,
        name: &str,
        status: ClusterStatus,
        message: impl Into<String>,
    ) -> Result<ClusterRecord> {
        let mut state = self.state.write();
        let record = state
            .clusters
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        let previous = record.status;
        record.status = status;
        record.message = message.into();
        record.last_updated = record.last_updated.max(Utc::now());

        info!("Cluster '{}' status {} -> {}", name, previous, status);
        Ok(record.clone())
    }

    /// Removes `name` and returns the status it had
    pub fn detach(&self, name: &str) -> Result<ClusterStatus> {
        let mut state = self.state.write();
        match state.clusters.remove(name) {
            Some(record) => {
                info!(
                    "Cluster '{}' detached (previous status: {})",
                    name, record.status
                );
                Ok(record.status)
            }
            None => {
                warn!("Detach rejected: cluster '{}' not found", name);
                Err(RegistryError::NotFound(name.to_string()))
            }
        }
    }

    /// Drops every record and marks the registry uninitialized
    pub fn cleanup(&self) {
        let mut state = self.state.write();
        let dropped = state.clusters.len();
        state.clusters.clear();
        state.initialized = false;
        state.started_at = None;
        info!("🧹 Cluster registry cleaned up ({} clusters dropped)", dropped);
    }

    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_records(self.state.read().clusters.values())
    }

    pub fn status_report(&self) -> StatusReport {
        let state = self.state.read();
        StatusReport {
            uptime: state.uptime(),
            clusters: state.clusters.values().cloned().collect(),
            summary: StatusSummary::from_records(state.clusters.values()),
        }
    }

    pub fn health(&self) -> HealthStatus {
        self.health_report().status
    }

    pub fn health_report(&self) -> HealthReport {
        let state = self.state.read();
        let uptime = state.uptime();
        let healthy = state.initialized && uptime > Duration::ZERO;
        HealthReport {
            status: if healthy {
                HealthStatus::Healthy
            } else {
                HealthStatus::Unhealthy
            },
            initialized: state.initialized,
            uptime,
            clusters: state.clusters.len(),
            ready: state
                .clusters
                .values()
                .filter(|c| c.status == ClusterStatus::Ready)
                .count(),
        }
    }

    pub fn ensure_ready(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RegistryError::NotInitialized)
        }
    }
}

fn demo_clusters() -> Vec<ClusterRecord> {
    let now = Utc::now();
    let seed = |name: &str, status, message: &str, minutes_ago, node_count, region: &str| {
        ClusterRecord {
            name: name.to_string(),
            status,
            message: message.to_string(),
            last_updated: now - ChronoDuration::minutes(minutes_ago),
            node_count,
            namespace: DEFAULT_NAMESPACE.to_string(),
            region: region.to_string(),
        }
    };

    vec![
        seed(
            "prod-cluster-east",
            ClusterStatus::Ready,
            "Production cluster - East region",
            10,
            5,
            "us-east-1",
        ),
        seed(
            "staging-cluster",
            ClusterStatus::Ready,
            "Staging environment ready",
            5,
            2,
            "us-west-2",
        ),
        seed(
            "dev-cluster-1",
            ClusterStatus::Pending,
            "Development cluster initializing",
            2,
            1,
            "eu-west-1",
        ),
    ]
}

/// Renders a duration as `1h2m3.004s`, `2m3.004s`, `3.004s` or `0s`
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let millis = uptime.subsec_millis();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if total == 0 && millis == 0 {
        "0s".to_string()
    } else if hours > 0 {
        format!("{}h{}m{}.{:03}s", hours, minutes, seconds, millis)
    } else if minutes > 0 {
        format!("{}m{}.{:03}s", minutes, seconds, millis)
    } else {
        format!("{}.{:03}s", seconds, millis)
    }
}
