//! Permission vocabulary and seed-time wildcard expansion

use crate::utils::error::{AuthzError, Result};

use super::types::Permission;

/// Reserved action granting everything
pub const GLOBAL_WILDCARD: &str = "*";

/// Resource kinds that carry CRUD permissions
pub const RESOURCE_KINDS: [&str; 5] = ["project", "module", "document", "report", "workspace"];

pub const CRUD_ACTIONS: [&str; 4] = ["create", "read", "update", "delete"];

/// `"<resource>:*"`
pub fn resource_wildcard(resource: &str) -> String {
    format!("{}:{}", resource, GLOBAL_WILDCARD)
}

/// Every permission the catalog knows: the global wildcard, then for each
/// resource kind its wildcard followed by its CRUD actions.
pub fn vocabulary() -> Vec<Permission> {
    let mut actions = vec![GLOBAL_WILDCARD.to_string()];
    for resource in RESOURCE_KINDS {
        actions.push(resource_wildcard(resource));
        for action in CRUD_ACTIONS {
            actions.push(format!("{}:{}", resource, action));
        }
    }

    actions
        .into_iter()
        .map(|action| Permission {
            description: Some(format!("Permission to {}", action)),
            action,
        })
        .collect()
}

/// Expand a permission pattern into the action strings stored on a role.
///
/// `*` stays literal, `document:*` becomes the four concrete document
/// actions, and concrete actions pass through after validation.
pub fn expand_pattern(pattern: &str) -> Result<Vec<String>> {
    if pattern == GLOBAL_WILDCARD {
        return Ok(vec![GLOBAL_WILDCARD.to_string()]);
    }

    let (resource, action) = pattern
        .split_once(':')
        .ok_or_else(|| AuthzError::validation(format!("Malformed permission: {}", pattern)))?;

    if !RESOURCE_KINDS.contains(&resource) {
        return Err(AuthzError::validation(format!(
            "Unknown resource kind in permission: {}",
            pattern
        )));
    }

    if action == GLOBAL_WILDCARD {
        return Ok(CRUD_ACTIONS
            .iter()
            .map(|a| format!("{}:{}", resource, a))
            .collect());
    }

    if !CRUD_ACTIONS.contains(&action) {
        return Err(AuthzError::validation(format!(
            "Unknown action in permission: {}",
            pattern
        )));
    }

    Ok(vec![pattern.to_string()])
}
