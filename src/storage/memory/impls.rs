//! Store trait implementations for [`MemoryStore`]

use crate::core::catalog::{Permission, Role};
use crate::core::resource::{ResourceId, ResourceRef, ResourceType, RoleId, UserId};
use crate::storage::traits::{CatalogStore, GrantStore, HierarchyStore};
use crate::storage::types::GrantedRole;
use crate::utils::error::{AuthzError, Result};
use async_trait::async_trait;
use std::collections::{BTreeSet, HashSet};

use super::store::MemoryStore;

#[async_trait]
impl GrantStore for MemoryStore {
    async fn find_grants(
        &self,
        user_id: UserId,
        resource: ResourceRef,
    ) -> Result<Vec<GrantedRole>> {
        self.record_query();
        let tables = self.tables.read();

        Ok(tables
            .grants
            .iter()
            .filter(|g| g.user_id == user_id && g.resource == resource)
            .map(|g| GrantedRole {
                role_id: g.role_id,
                permissions: tables
                    .role_permissions
                    .get(&g.role_id)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect())
    }

    async fn find_role_holders(&self, role_id: RoleId) -> Result<Vec<UserId>> {
        self.record_query();
        let tables = self.tables.read();

        let holders: BTreeSet<UserId> = tables
            .grants
            .iter()
            .filter(|g| g.role_id == role_id)
            .map(|g| g.user_id)
            .collect();
        Ok(holders.into_iter().collect())
    }
}

#[async_trait]
impl HierarchyStore for MemoryStore {
    async fn find_parent_project_id(&self, module_id: ResourceId) -> Result<Option<ResourceId>> {
        self.record_query();
        let tables = self.tables.read();

        // A module whose project record is gone is orphaned
        Ok(tables
            .modules
            .get(&module_id)
            .copied()
            .filter(|project_id| tables.projects.contains(project_id)))
    }

    async fn find_parent_module_id(
        &self,
        resource_type: ResourceType,
        resource_id: ResourceId,
    ) -> Result<Option<ResourceId>> {
        self.record_query();
        Ok(self
            .tables
            .read()
            .children
            .get(&(resource_type, resource_id))
            .copied())
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn upsert_permission(&self, action: &str, description: &str) -> Result<bool> {
        let mut tables = self.tables.write();
        if tables.permissions.contains_key(action) {
            return Ok(false);
        }

        tables.permissions.insert(
            action.to_string(),
            Permission {
                action: action.to_string(),
                description: Some(description.to_string()),
            },
        );
        Ok(true)
    }

    async fn find_role(&self, name: &str, project_id: Option<ResourceId>) -> Result<Option<Role>> {
        Ok(self
            .tables
            .read()
            .roles
            .values()
            .find(|r| r.name == name && r.project_id == project_id)
            .cloned())
    }

    async fn create_role(
        &self,
        name: &str,
        project_id: Option<ResourceId>,
        description: &str,
    ) -> Result<Role> {
        let mut tables = self.tables.write();
        if tables
            .roles
            .values()
            .any(|r| r.name == name && r.project_id == project_id)
        {
            return Err(AuthzError::validation(format!(
                "Role {} already exists for project {:?}",
                name, project_id
            )));
        }

        tables.next_role_id += 1;
        let role = Role {
            id: tables.next_role_id,
            name: name.to_string(),
            project_id,
            description: Some(description.to_string()),
        };
        tables.roles.insert(role.id, role.clone());
        tables.role_permissions.insert(role.id, HashSet::new());
        Ok(role)
    }

    async fn attach_permission(&self, role_id: RoleId, action: &str) -> Result<bool> {
        let mut tables = self.tables.write();
        if !tables.permissions.contains_key(action) {
            return Err(AuthzError::not_found(format!("Permission {}", action)));
        }

        tables
            .role_permissions
            .get_mut(&role_id)
            .map(|set| set.insert(action.to_string()))
            .ok_or_else(|| AuthzError::not_found(format!("Role {}", role_id)))
    }

    async fn role_permissions(&self, role_id: RoleId) -> Result<HashSet<String>> {
        self.tables
            .read()
            .role_permissions
            .get(&role_id)
            .cloned()
            .ok_or_else(|| AuthzError::not_found(format!("Role {}", role_id)))
    }

    async fn permission_count(&self) -> Result<usize> {
        Ok(self.tables.read().permissions.len())
    }

    async fn role_count(&self) -> Result<usize> {
        Ok(self.tables.read().roles.len())
    }
}
