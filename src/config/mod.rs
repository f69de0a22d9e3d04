//! Configuration management
//!
//! Serde-backed configuration for the store connection and the proximity
//! gate, with per-field defaults and YAML file loading.

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Redis configuration
    #[serde(default)]
    pub redis: RedisConfig,
    /// Silo proximity configuration
    #[serde(default)]
    pub silo: SiloConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Merge configurations, preferring non-default values from `other`
    pub fn merge(mut self, other: Self) -> Self {
        self.redis = self.redis.merge(other.redis);
        self.silo = self.silo.merge(other.silo);
        self
    }
}

/// Redis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl RedisConfig {
    /// Merge Redis configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != RedisConfig::default().url {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        self
    }
}

/// Silo proximity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiloConfig {
    /// Maximum great-circle distance to a silo, in kilometers, for a
    /// location pin to be accepted
    #[serde(default = "default_proximity_threshold_km")]
    pub proximity_threshold_km: f64,
}

impl Default for SiloConfig {
    fn default() -> Self {
        Self {
            proximity_threshold_km: default_proximity_threshold_km(),
        }
    }
}

impl SiloConfig {
    /// Merge silo configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.proximity_threshold_km != default_proximity_threshold_km() {
            self.proximity_threshold_km = other.proximity_threshold_km;
        }
        self
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    5
}

fn default_proximity_threshold_km() -> f64 {
    10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.redis.url, "redis://localhost:6379");
        assert_eq!(config.redis.max_connections, 10);
        assert_eq!(config.silo.proximity_threshold_km, 10.0);
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
redis:
  url: "redis://cache.internal:6380"
silo:
  proximity_threshold_km: 25.0
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.redis.url, "redis://cache.internal:6380");
        assert_eq!(config.redis.max_connections, 10);
        assert_eq!(config.silo.proximity_threshold_km, 25.0);
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = Config::default();
        let override_config = Config {
            silo: SiloConfig {
                proximity_threshold_km: 5.0,
            },
            ..Config::default()
        };
        let merged = base.merge(override_config);
        assert_eq!(merged.silo.proximity_threshold_km, 5.0);
        assert_eq!(merged.redis.url, "redis://localhost:6379");
    }
}
