//! Configuration data models
//!
//! This module defines all configuration structures used by the engine.

#![allow(missing_docs)]

pub mod authz;
pub mod cache;
pub mod logging;

pub use authz::*;
pub use cache::*;
pub use logging::*;

/// Default for whether resolved permissions are cached
pub fn default_cache_enabled() -> bool {
    true
}

pub fn default_cache_ttl_secs() -> u64 {
    60 // 1 minute
}

/// Entry count above which the cache sweeps out expired entries
pub fn default_cache_max_entries() -> usize {
    10_000
}

pub fn default_log_level() -> String {
    "info".to_string()
}
