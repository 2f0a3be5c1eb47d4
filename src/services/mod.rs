pub mod onboarding;
pub mod registry;

pub use onboarding::{OnboardingOutcome, OnboardingSimulator};
pub use registry::{format_uptime, ClusterRegistry, HealthReport, HealthStatus, StatusReport};
