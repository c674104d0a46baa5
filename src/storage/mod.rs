//! Storage layer for the permission engine
//!
//! The engine reads grants, parent links and the role catalog through the
//! traits defined here. The backing store is owned by the surrounding
//! application; [`MemoryStore`] is a complete in-process implementation.

/// In-memory storage backend
pub mod memory;
mod traits;
mod types;

pub use memory::MemoryStore;
pub use traits::{CatalogStore, GrantStore, HierarchyStore};
pub use types::{Grant, GrantedRole};

#[cfg(test)]
pub use traits::{MockCatalogStore, MockGrantStore, MockHierarchyStore};
