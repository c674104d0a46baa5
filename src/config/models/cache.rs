//! Permission cache configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Permission cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCacheConfig {
    /// Enable caching of resolved action sets
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    /// Cache TTL in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
    /// Soft entry limit. Past it, inserts sweep expired entries.
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,
}

impl Default for PermissionCacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            ttl_secs: default_cache_ttl_secs(),
            max_entries: default_cache_max_entries(),
        }
    }
}

impl PermissionCacheConfig {
    /// Merge cache configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.enabled != default_cache_enabled() {
            self.enabled = other.enabled;
        }
        if other.ttl_secs != default_cache_ttl_secs() {
            self.ttl_secs = other.ttl_secs;
        }
        if other.max_entries != default_cache_max_entries() {
            self.max_entries = other.max_entries;
        }
        self
    }
}
