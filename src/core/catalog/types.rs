//! Catalog type definitions

use crate::core::resource::{ResourceId, RoleId};
use serde::{Deserialize, Serialize};

/// Permission definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Unique action string
    pub action: String,
    /// Human readable description
    pub description: Option<String>,
}

/// Role definition
///
/// Its permission set lives in the catalog store and is read with
/// [`CatalogStore::role_permissions`](crate::storage::CatalogStore::role_permissions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    /// `None` for global template roles
    pub project_id: Option<ResourceId>,
    pub description: Option<String>,
}

impl Role {
    pub fn is_template(&self) -> bool {
        self.project_id.is_none()
    }
}
