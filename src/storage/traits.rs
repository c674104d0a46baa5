//! Store traits consumed by the engine

use crate::core::catalog::Role;
use crate::core::resource::{ResourceId, ResourceRef, ResourceType, RoleId, UserId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;

use super::types::GrantedRole;

/// Read access to user grants
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GrantStore: Send + Sync {
    /// Grants whose resource tuple equals `resource` exactly, each with the
    /// role's already-expanded action strings.
    async fn find_grants(&self, user_id: UserId, resource: ResourceRef)
    -> Result<Vec<GrantedRole>>;

    /// Every user holding `role_id` on any resource
    async fn find_role_holders(&self, role_id: RoleId) -> Result<Vec<UserId>>;
}

/// Parent-id lookups for the resource tree
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HierarchyStore: Send + Sync {
    /// Project owning a module, `None` when the module record is missing
    async fn find_parent_project_id(&self, module_id: ResourceId) -> Result<Option<ResourceId>>;

    /// Module owning a document, report or workspace, `None` when the record
    /// is missing
    async fn find_parent_module_id(
        &self,
        resource_type: ResourceType,
        resource_id: ResourceId,
    ) -> Result<Option<ResourceId>>;
}

/// Permission and role catalog, written by seeding
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert a permission unless the action string already exists.
    /// Returns true when a new permission was created.
    async fn upsert_permission(&self, action: &str, description: &str) -> Result<bool>;

    /// Find a role by its natural key `(name, project_id)`
    async fn find_role(&self, name: &str, project_id: Option<ResourceId>) -> Result<Option<Role>>;

    async fn create_role(
        &self,
        name: &str,
        project_id: Option<ResourceId>,
        description: &str,
    ) -> Result<Role>;

    /// Link an existing permission to a role. Returns true when the link is new.
    async fn attach_permission(&self, role_id: RoleId, action: &str) -> Result<bool>;

    /// The role's flattened action strings
    async fn role_permissions(&self, role_id: RoleId) -> Result<HashSet<String>>;

    async fn permission_count(&self) -> Result<usize>;

    async fn role_count(&self) -> Result<usize>;
}
