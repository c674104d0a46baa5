//! Engine configuration

use super::*;
use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Environment variable enabling or disabling the cache
pub const ENV_CACHE_ENABLED: &str = "AUTHZ_CACHE_ENABLED";
/// Environment variable holding the cache TTL in seconds
pub const ENV_CACHE_TTL_SECS: &str = "AUTHZ_CACHE_TTL_SECS";
/// Environment variable holding the cache's soft entry limit
pub const ENV_CACHE_MAX_ENTRIES: &str = "AUTHZ_CACHE_MAX_ENTRIES";
pub const ENV_LOG_LEVEL: &str = "AUTHZ_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "AUTHZ_LOG_JSON";

/// Permission engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthzConfig {
    #[serde(default)]
    pub cache: PermissionCacheConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AuthzConfig {
    /// Defaults overridden by any `AUTHZ_*` variables present
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with an explicit variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_CACHE_ENABLED) {
            config.cache.enabled = parse_var(ENV_CACHE_ENABLED, &value)?;
        }
        if let Some(value) = lookup(ENV_CACHE_TTL_SECS) {
            config.cache.ttl_secs = parse_var(ENV_CACHE_TTL_SECS, &value)?;
        }
        if let Some(value) = lookup(ENV_CACHE_MAX_ENTRIES) {
            config.cache.max_entries = parse_var(ENV_CACHE_MAX_ENTRIES, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = value.trim().to_lowercase();
        }
        if let Some(value) = lookup(ENV_LOG_JSON) {
            config.logging.json = parse_var(ENV_LOG_JSON, &value)?;
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.cache = self.cache.merge(other.cache);
        self.logging = self.logging.merge(other.logging);
        self
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AuthzError::config(format!("Invalid value for {}: {:?}", name, value)))
}
