//! Storage record types

use crate::core::resource::{ResourceRef, RoleId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// "`user_id` holds `role_id` on `resource`"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    pub user_id: UserId,
    pub role_id: RoleId,
    pub resource: ResourceRef,
}

/// A grant joined with its role's flattened permission set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantedRole {
    pub role_id: RoleId,
    pub permissions: HashSet<String>,
}
