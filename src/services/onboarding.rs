use rand::{seq::SliceRandom, Rng};

use crate::models::ClusterStatus;

pub const REGIONS: [&str; 4] = ["us-east-1", "us-west-2", "eu-west-1", "ap-south-1"];

/// Probability that a freshly onboarded cluster comes up ready right away
pub const IMMEDIATE_READY_PROBABILITY: f64 = 0.3;

pub const MIN_NODES: u32 = 1;
pub const MAX_NODES: u32 = 5;

/// Initial state assigned to a newly onboarded cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingOutcome {
    pub status: ClusterStatus,
    pub message: String,
    pub node_count: u32,
}

/// Stands in for a provisioning backend: picks a region when none is given
/// and decides whether the cluster is ready immediately or still pending.
///
/// Stateless; every decision draws from the caller's random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnboardingSimulator;

impl OnboardingSimulator {
    pub fn new() -> Self {
        Self
    }

    /// Returns `requested` if non-empty, otherwise a region drawn uniformly from [`REGIONS`]
    pub fn resolve_region<R: Rng>(&self, requested: Option<&str>, rng: &mut R) -> String {
        match requested.map(str::trim).filter(|r| !r.is_empty()) {
            Some(region) => region.to_string(),
            // REGIONS is non-empty, choose only fails on an empty slice
            None => REGIONS.choose(rng).copied().unwrap_or(REGIONS[0]).to_string(),
        }
    }

    pub fn simulate<R: Rng>(&self, region: &str, rng: &mut R) -> OnboardingOutcome {
        let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);

        if rng.gen_bool(IMMEDIATE_READY_PROBABILITY) {
            OnboardingOutcome {
                status: ClusterStatus::Ready,
                message: format!("Cluster onboarded successfully in {}", region),
                node_count,
            }
        } else {
            OnboardingOutcome {
                status: ClusterStatus::Pending,
                message: format!("Cluster onboarding initiated for region {}", region),
                node_count,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashMap;

    #[test]
    fn explicit_region_is_kept() {
        let sim = OnboardingSimulator::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(sim.resolve_region(Some("ap-south-1"), &mut rng), "ap-south-1");
        }
    }

    #[test]
    fn blank_region_falls_back_to_random_choice() {
        let sim = OnboardingSimulator::new();
        let mut rng = StdRng::seed_from_u64(7);
        let region = sim.resolve_region(Some("   "), &mut rng);
        assert!(REGIONS.contains(&region.as_str()));
    }

    #[test]
    fn random_regions_cover_every_value() {
        let sim = OnboardingSimulator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen: HashMap<String, usize> = HashMap::new();
        for _ in 0..10_000 {
            *seen.entry(sim.resolve_region(None, &mut rng)).or_default() += 1;
        }
        assert_eq!(seen.len(), REGIONS.len());
        for region in REGIONS {
            let count = seen[region];
            // uniform would be 2500 each
            assert!(count > 2000 && count < 3000, "{} drawn {} times", region, count);
        }
    }

    #[test]
    fn both_branches_occur_and_node_count_stays_in_range() {
        let sim = OnboardingSimulator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ready = 0;
        let mut pending = 0;
        for _ in 0..1_000 {
            let outcome = sim.simulate("eu-west-1", &mut rng);
            assert!((MIN_NODES..=MAX_NODES).contains(&outcome.node_count));
            match outcome.status {
                ClusterStatus::Ready => {
                    ready += 1;
                    assert_eq!(outcome.message, "Cluster onboarded successfully in eu-west-1");
                }
                ClusterStatus::Pending => {
                    pending += 1;
                    assert_eq!(
                        outcome.message,
                        "Cluster onboarding initiated for region eu-west-1"
                    );
                }
                other => panic!("unexpected status {}", other),
            }
        }
        assert!(ready > 200 && ready < 400, "ready = {}", ready);
        assert_eq!(ready + pending, 1_000);
    }

    #[test]
    fn same_seed_gives_same_outcome() {
        let sim = OnboardingSimulator::new();
        let a = sim.simulate("us-east-1", &mut StdRng::seed_from_u64(99));
        let b = sim.simulate("us-east-1", &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
