//! Resource hierarchy
//!
//! Resources form a strict containment tree:
//! `System -> Project -> Module -> {Document, Report, Workspace}`.
//! Grants made on an ancestor apply to every descendant.

mod hierarchy;
mod types;

pub use hierarchy::{HierarchyResolver, MAX_HIERARCHY_DEPTH, ParentLookup, ParentStrategy};
pub use types::{ResourceId, ResourceRef, ResourceType, RoleId, SYSTEM_RESOURCE_ID, UserId};
