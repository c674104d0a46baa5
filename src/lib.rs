//! # Hierarchy AuthZ
//!
//! Hierarchical, cached permission resolution. Resources form a fixed tree
//! (`System -> Project -> Module -> {Document, Report, Workspace}`) and a role
//! granted on any ancestor applies to every descendant.
//!
//! ## Features
//!
//! - **Inheritance**: grants on an ancestor flow down to all descendants
//! - **Wildcards**: `*` grants everything; `resource:*` is expanded when roles are seeded
//! - **Caching**: resolved action sets are memoized per `(user, resource)` with a TTL
//!   and can be dropped per user, per role, or wholesale
//! - **Explicit failures**: store outages are errors, never a silent "deny"
//!
//! ## Quick Start
//!
//! ```rust
//! use hierarchy_authz::{
//!     AuthzConfig, MemoryStore, PermissionEngine, ResourceRef, ResourceType, seed_catalog,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> hierarchy_authz::Result<()> {
//!     let store = Arc::new(MemoryStore::new());
//!     seed_catalog(store.as_ref()).await?;
//!
//!     store.insert_project(1);
//!     store.insert_module(10, 1);
//!     store.insert_child(ResourceType::Document, 100, 10)?;
//!
//!     let editor = store.role_id("Editor").expect("seeded");
//!     store.create_grant(42, editor, ResourceRef::new(ResourceType::Module, 10)?)?;
//!
//!     let engine = PermissionEngine::new(store.clone(), store.clone(), &AuthzConfig::default())?;
//!     assert!(engine.check(42, "document:read", ResourceType::Document, 100).await?);
//!     assert!(!engine.check(42, "document:delete", ResourceType::Document, 100).await?);
//!
//!     // After any grant change for user 42
//!     engine.invalidate_cache(42);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::{AuthzConfig, Config};
pub use utils::error::{AuthzError, Result};

pub use crate::core::cache::{CacheKey, CacheStats, PermissionCache};
pub use crate::core::catalog::{GLOBAL_WILDCARD, Permission, Role, SeedReport, seed_catalog};
pub use crate::core::engine::{PermissionCheck, PermissionEngine};
pub use crate::core::resource::{ResourceId, ResourceRef, ResourceType, RoleId, UserId};
pub use storage::{CatalogStore, Grant, GrantStore, GrantedRole, HierarchyStore, MemoryStore};
pub use utils::logging::init_logging;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
