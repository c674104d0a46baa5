//! Concurrent permission cache

use crate::config::{PermissionCacheConfig, default_cache_max_entries};
use crate::core::resource::UserId;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{debug, info};

use super::types::{ActionSet, CacheEntry, CacheKey, CacheStats};

/// Per-user invalidatable TTL cache of resolved action sets.
///
/// Backed by a sharded map: reads and writes on different keys do not block
/// each other, and no lock is held once a call returns.
///
/// Expired entries are dropped when read, and swept out by inserts once the
/// map holds more than `max_entries`. The limit is soft: live entries are
/// never evicted early.
#[derive(Debug)]
pub struct PermissionCache {
    entries: DashMap<CacheKey, CacheEntry>,
    ttl: Duration,
    enabled: bool,
    max_entries: usize,
    /// Length above which the next insert sweeps
    sweep_at: AtomicUsize,
    hits: AtomicU64,
    misses: AtomicU64,
    invalidations: AtomicU64,
}

impl PermissionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            enabled: true,
            max_entries: default_cache_max_entries(),
            sweep_at: AtomicUsize::new(default_cache_max_entries()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            invalidations: AtomicU64::new(0),
        }
    }

    /// A cache that never stores anything
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(Duration::ZERO)
        }
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self.sweep_at = AtomicUsize::new(max_entries);
        self
    }

    pub fn from_config(config: &PermissionCacheConfig) -> Self {
        if config.enabled {
            Self::new(Duration::from_secs(config.ttl_secs)).with_max_entries(config.max_entries)
        } else {
            Self::disabled()
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Live entry for `key`. Expired entries count as absent and are evicted.
    pub fn get(&self, key: &CacheKey) -> Option<ActionSet> {
        if !self.enabled {
            return None;
        }

        // The shard guard must be released before `remove_if` below.
        let live = self
            .entries
            .get(key)
            .map(|entry| (!entry.is_expired()).then(|| entry.actions.clone()));

        match live {
            Some(Some(actions)) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Permission cache hit for {}", key);
                Some(actions)
            }
            Some(None) => {
                self.entries.remove_if(key, |_, entry| entry.is_expired());
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("Permission cache entry expired for {}", key);
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Unconditional overwrite with an explicit TTL
    pub fn put(&self, key: CacheKey, actions: ActionSet, ttl: Duration) {
        if !self.enabled {
            return;
        }
        self.entries.insert(key, CacheEntry::new(actions, ttl));
        self.sweep_if_over_limit();
    }

    /// Overwrite using the configured TTL
    pub fn insert(&self, key: CacheKey, actions: ActionSet) {
        self.put(key, actions, self.ttl);
    }

    /// Remove every entry belonging to `user_id`
    pub fn invalidate_user(&self, user_id: UserId) -> usize {
        let mut removed = 0;
        self.entries.retain(|key, _| {
            let keep = key.user_id != user_id;
            if !keep {
                removed += 1;
            }
            keep
        });

        self.invalidations.fetch_add(removed as u64, Ordering::Relaxed);
        info!("Invalidated {} permission cache entries for user {}", removed, user_id);
        removed
    }

    /// Drop every entry
    pub fn invalidate_all(&self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.sweep_at.store(self.max_entries, Ordering::Relaxed);
        self.invalidations.fetch_add(removed as u64, Ordering::Relaxed);
        info!("Flushed permission cache ({} entries)", removed);
        removed
    }

    /// Evict expired entries eagerly
    pub fn purge_expired(&self) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired();
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    /// Sweep expired entries once the map outgrows its threshold. If live
    /// entries alone exceed the limit, the threshold backs off to twice the
    /// live count so sweeps stay amortized.
    fn sweep_if_over_limit(&self) {
        if self.entries.len() <= self.sweep_at.load(Ordering::Relaxed) {
            return;
        }

        let removed = self.purge_expired();
        let live = self.entries.len();
        let next = self.max_entries.max(live.saturating_mul(2));
        self.sweep_at.store(next, Ordering::Relaxed);
        debug!("Permission cache sweep removed {} expired entries, {} live", removed, live);
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
        }
    }
}

impl Default for PermissionCache {
    fn default() -> Self {
        Self::from_config(&PermissionCacheConfig::default())
    }
}
