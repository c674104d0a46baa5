//! Cache type definitions

use crate::core::resource::{ResourceRef, UserId};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Shared, immutable resolved action set
pub type ActionSet = Arc<HashSet<String>>;

/// Cache key: one user on one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub user_id: UserId,
    pub resource: ResourceRef,
}

impl CacheKey {
    pub fn new(user_id: UserId, resource: ResourceRef) -> Self {
        Self { user_id, resource }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.user_id, self.resource)
    }
}

/// Cached action set with its expiry
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub actions: ActionSet,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(actions: ActionSet, ttl: Duration) -> Self {
        Self {
            actions,
            expires_at: Instant::now() + ttl,
        }
    }

    /// Readable only while `now < expires_at`
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries removed by invalidation calls
    pub invalidations: u64,
}

impl CacheStats {
    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
