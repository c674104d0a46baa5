//! Resolved-permission cache
//!
//! Time-boxed memoization of resolved action sets keyed by
//! `(user, resource type, resource id)`, removable per user.

mod cache;
mod types;

pub use cache::PermissionCache;
pub use types::{ActionSet, CacheEntry, CacheKey, CacheStats};
