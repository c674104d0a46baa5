//! In-memory tables and resource-management operations

use crate::core::catalog::{Permission, Role};
use crate::core::resource::{ResourceId, ResourceRef, ResourceType, RoleId, UserId};
use crate::storage::types::Grant;
use crate::utils::error::{AuthzError, Result};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug, Default)]
pub(super) struct Tables {
    /// Permissions keyed by action string
    pub(super) permissions: HashMap<String, Permission>,
    pub(super) roles: HashMap<RoleId, Role>,
    pub(super) role_permissions: HashMap<RoleId, HashSet<String>>,
    pub(super) next_role_id: RoleId,
    pub(super) grants: HashSet<Grant>,
    pub(super) projects: HashSet<ResourceId>,
    /// module id -> project id
    pub(super) modules: HashMap<ResourceId, ResourceId>,
    /// (Document | Report | Workspace, id) -> module id
    pub(super) children: HashMap<(ResourceType, ResourceId), ResourceId>,
}

/// Thread-safe in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(super) tables: RwLock<Tables>,
    queries: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trait queries served so far
    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::Relaxed)
    }

    pub(super) fn record_query(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }

    /// Register a project. Projects hang directly under System.
    pub fn insert_project(&self, project_id: ResourceId) {
        self.tables.write().projects.insert(project_id);
    }

    /// Register a module under `project_id`
    pub fn insert_module(&self, module_id: ResourceId, project_id: ResourceId) {
        self.tables.write().modules.insert(module_id, project_id);
    }

    /// Register a document, report or workspace under `module_id`
    pub fn insert_child(
        &self,
        resource_type: ResourceType,
        resource_id: ResourceId,
        module_id: ResourceId,
    ) -> Result<()> {
        match resource_type {
            ResourceType::Document | ResourceType::Report | ResourceType::Workspace => {
                self.tables
                    .write()
                    .children
                    .insert((resource_type, resource_id), module_id);
                Ok(())
            }
            other => Err(AuthzError::validation(format!(
                "{} is not a module child type",
                other
            ))),
        }
    }

    /// Remove a project record, orphaning its modules
    pub fn remove_project(&self, project_id: ResourceId) -> bool {
        self.tables.write().projects.remove(&project_id)
    }

    /// Remove a module record, orphaning anything below it
    pub fn remove_module(&self, module_id: ResourceId) -> bool {
        self.tables.write().modules.remove(&module_id).is_some()
    }

    /// Grant `role_id` to `user_id` on `resource`. Returns false if the grant
    /// already existed.
    pub fn create_grant(
        &self,
        user_id: UserId,
        role_id: RoleId,
        resource: ResourceRef,
    ) -> Result<bool> {
        let mut tables = self.tables.write();
        if !tables.roles.contains_key(&role_id) {
            return Err(AuthzError::not_found(format!("Role {}", role_id)));
        }

        let created = tables.grants.insert(Grant {
            user_id,
            role_id,
            resource,
        });
        debug!(
            "Grant role {} to user {} on {} (new: {})",
            role_id, user_id, resource, created
        );
        Ok(created)
    }

    pub fn delete_grant(&self, user_id: UserId, role_id: RoleId, resource: ResourceRef) -> bool {
        self.tables.write().grants.remove(&Grant {
            user_id,
            role_id,
            resource,
        })
    }

    /// Delete every grant held by `user_id`, returning how many were removed
    pub fn delete_user_grants(&self, user_id: UserId) -> usize {
        let mut tables = self.tables.write();
        let before = tables.grants.len();
        tables.grants.retain(|g| g.user_id != user_id);
        before - tables.grants.len()
    }

    /// Replace the permission set of a role. Every action must already exist
    /// in the catalog.
    pub fn set_role_permissions(&self, role_id: RoleId, actions: HashSet<String>) -> Result<()> {
        let mut tables = self.tables.write();
        if !tables.roles.contains_key(&role_id) {
            return Err(AuthzError::not_found(format!("Role {}", role_id)));
        }
        if let Some(unknown) = actions
            .iter()
            .find(|a| !tables.permissions.contains_key(a.as_str()))
        {
            return Err(AuthzError::not_found(format!("Permission {}", unknown)));
        }

        tables.role_permissions.insert(role_id, actions);
        Ok(())
    }

    /// Look up a global (template) role id by name
    pub fn role_id(&self, name: &str) -> Option<RoleId> {
        self.tables
            .read()
            .roles
            .values()
            .find(|r| r.name == name && r.project_id.is_none())
            .map(|r| r.id)
    }

    pub fn grants_for_user(&self, user_id: UserId) -> Vec<Grant> {
        self.tables
            .read()
            .grants
            .iter()
            .filter(|g| g.user_id == user_id)
            .copied()
            .collect()
    }
}
