//! Idempotent catalog seeding

use crate::storage::CatalogStore;
use crate::utils::error::Result;
use std::collections::BTreeSet;
use tracing::{debug, info};

use super::vocabulary::{GLOBAL_WILDCARD, RESOURCE_KINDS, expand_pattern, vocabulary};

/// A reusable global role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTemplate {
    pub name: &'static str,
    pub description: &'static str,
    /// `"*"`, or bare actions applied to every resource kind
    pub actions: &'static [&'static str],
}

impl RoleTemplate {
    /// Fully expanded action strings for this role
    pub fn permissions(&self) -> Result<BTreeSet<String>> {
        let mut permissions = BTreeSet::new();
        for action in self.actions {
            if *action == GLOBAL_WILDCARD {
                permissions.insert(GLOBAL_WILDCARD.to_string());
                continue;
            }
            for resource in RESOURCE_KINDS {
                permissions.extend(expand_pattern(&format!("{}:{}", resource, action))?);
            }
        }
        Ok(permissions)
    }
}

/// Template roles created by [`seed_catalog`]
pub const ROLE_TEMPLATES: [RoleTemplate; 4] = [
    RoleTemplate {
        name: "Super Admin",
        description: "Global System Administrator",
        actions: &[GLOBAL_WILDCARD],
    },
    RoleTemplate {
        name: "Owner",
        description: "Standard Owner Role",
        actions: &[GLOBAL_WILDCARD],
    },
    RoleTemplate {
        name: "Editor",
        description: "Standard Editor Role",
        actions: &["read", "create", "update"],
    },
    RoleTemplate {
        name: "Viewer",
        description: "Standard Viewer Role",
        actions: &["read"],
    },
];

/// What a seeding run newly created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub permissions_created: usize,
    pub roles_created: usize,
    pub links_created: usize,
}

impl SeedReport {
    /// True when the run changed nothing
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Upsert the permission vocabulary and the template roles.
///
/// Permissions are keyed by action string and roles by `(name, project_id)`,
/// so running this any number of times yields the same catalog.
pub async fn seed_catalog(store: &dyn CatalogStore) -> Result<SeedReport> {
    info!("Seeding permission catalog");
    let mut report = SeedReport::default();

    for permission in vocabulary() {
        let description = permission.description.as_deref().unwrap_or_default();
        if store
            .upsert_permission(&permission.action, description)
            .await?
        {
            report.permissions_created += 1;
        }
    }

    for template in ROLE_TEMPLATES {
        let role = match store.find_role(template.name, None).await? {
            Some(role) => role,
            None => {
                report.roles_created += 1;
                store
                    .create_role(template.name, None, template.description)
                    .await?
            }
        };

        for action in template.permissions()? {
            if store.attach_permission(role.id, &action).await? {
                report.links_created += 1;
            }
        }
        debug!("Seeded role {} (id {})", role.name, role.id);
    }

    info!(
        "Catalog seeded: {} permissions, {} roles, {} role links created",
        report.permissions_created, report.roles_created, report.links_created
    );
    Ok(report)
}
