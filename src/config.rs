use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

use crate::models::DEFAULT_NAMESPACE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server_address: String,
    pub log_level: String,
    pub default_namespace: String,
    pub rng_seed: Option<u64>,
    pub seed_demo_clusters: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            rng_seed: None,
            seed_demo_clusters: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env only when explicitly asked to via USE_DOTENV=true
        if env::var("USE_DOTENV").ok().as_deref() == Some("true") {
            dotenv::dotenv().ok();
        }

        let defaults = Config::default();

        let rng_seed = match env::var("PLUGIN_RNG_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("PLUGIN_RNG_SEED is not a u64: {:?}", raw))?,
            ),
            Err(_) => None,
        };

        let seed_demo_clusters = match env::var("PLUGIN_SEED_DEMO_CLUSTERS") {
            Ok(raw) => parse_bool(&raw)
                .with_context(|| format!("PLUGIN_SEED_DEMO_CLUSTERS is not a boolean: {:?}", raw))?,
            Err(_) => defaults.seed_demo_clusters,
        };

        let config = Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or(defaults.server_address),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            default_namespace: env::var("PLUGIN_DEFAULT_NAMESPACE")
                .ok()
                .filter(|ns| !ns.trim().is_empty())
                .unwrap_or(defaults.default_namespace),
            rng_seed,
            seed_demo_clusters,
        };

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("unrecognized boolean '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_boolean_spellings() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool(" yes ").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn defaults_match_plugin_conventions() {
        let config = Config::default();
        assert_eq!(config.default_namespace, "kubestellar-system");
        assert!(config.seed_demo_clusters);
        assert!(config.rng_seed.is_none());
    }
}
