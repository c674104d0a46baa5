//! Resolution engine core

use crate::config::{AuthzConfig, Validate};
use crate::core::cache::{ActionSet, CacheKey, PermissionCache};
use crate::core::catalog::GLOBAL_WILDCARD;
use crate::core::resource::{
    HierarchyResolver, MAX_HIERARCHY_DEPTH, ResourceId, ResourceRef, ResourceType, RoleId, UserId,
};
use crate::storage::{GrantStore, HierarchyStore};
use crate::utils::error::{AuthzError, Result};
use futures::future::try_join_all;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, info};

use super::types::PermissionCheck;

type ResolveFuture<'a> = Pin<Box<dyn Future<Output = Result<ActionSet>> + Send + 'a>>;

/// Decides whether a user may perform an action on a resource.
///
/// The engine owns its cache. Store failures surface as errors, never as a
/// denied check.
pub struct PermissionEngine {
    grants: Arc<dyn GrantStore>,
    hierarchy: HierarchyResolver,
    cache: Arc<PermissionCache>,
}

impl PermissionEngine {
    /// Create an engine with a fresh cache built from `config`.
    ///
    /// Fails if the cache settings do not validate.
    pub fn new(
        grants: Arc<dyn GrantStore>,
        hierarchy: Arc<dyn HierarchyStore>,
        config: &AuthzConfig,
    ) -> Result<Self> {
        config
            .cache
            .validate()
            .map_err(|e| AuthzError::config(format!("Cache config error: {}", e)))?;

        Ok(Self::with_cache(
            grants,
            hierarchy,
            Arc::new(PermissionCache::from_config(&config.cache)),
        ))
    }

    /// Create an engine around an existing cache
    pub fn with_cache(
        grants: Arc<dyn GrantStore>,
        hierarchy: Arc<dyn HierarchyStore>,
        cache: Arc<PermissionCache>,
    ) -> Self {
        info!(
            "Permission engine ready (cache enabled: {}, ttl: {:?})",
            cache.is_enabled(),
            cache.ttl()
        );
        Self {
            grants,
            hierarchy: HierarchyResolver::new(hierarchy),
            cache,
        }
    }

    pub fn cache(&self) -> &Arc<PermissionCache> {
        &self.cache
    }

    /// True iff the resolved set holds `action` verbatim or `*`.
    ///
    /// Partial wildcards such as `project:*` are not interpreted here; roles
    /// store expanded actions.
    pub async fn check(
        &self,
        user_id: UserId,
        action: &str,
        resource_type: ResourceType,
        resource_id: ResourceId,
    ) -> Result<bool> {
        validate_action(action)?;
        let resource = ResourceRef::new(resource_type, resource_id)?;
        let actions = self.resolve_permissions(user_id, resource).await?;
        Ok(allows(&actions, action))
    }

    /// True iff every action in `actions` is allowed. An empty list is a
    /// validation error, not a vacuous allow.
    pub async fn check_all(
        &self,
        user_id: UserId,
        actions: &[&str],
        resource_type: ResourceType,
        resource_id: ResourceId,
    ) -> Result<bool> {
        validate_actions(actions)?;
        let resource = ResourceRef::new(resource_type, resource_id)?;
        let resolved = self.resolve_permissions(user_id, resource).await?;
        Ok(actions.iter().all(|a| allows(&resolved, a)))
    }

    /// True iff at least one action in `actions` is allowed. An empty list is
    /// a validation error.
    pub async fn check_any(
        &self,
        user_id: UserId,
        actions: &[&str],
        resource_type: ResourceType,
        resource_id: ResourceId,
    ) -> Result<bool> {
        validate_actions(actions)?;
        let resource = ResourceRef::new(resource_type, resource_id)?;
        let resolved = self.resolve_permissions(user_id, resource).await?;
        Ok(actions.iter().any(|a| allows(&resolved, a)))
    }

    /// Detailed permission check
    pub async fn check_detailed(
        &self,
        user_id: UserId,
        action: &str,
        resource_type: ResourceType,
        resource_id: ResourceId,
    ) -> Result<PermissionCheck> {
        validate_action(action)?;
        let resource = ResourceRef::new(resource_type, resource_id)?;
        let actions = self.resolve_permissions(user_id, resource).await?;

        let matched = if actions.contains(action) {
            Some(action.to_string())
        } else if actions.contains(GLOBAL_WILDCARD) {
            Some(GLOBAL_WILDCARD.to_string())
        } else {
            None
        };

        Ok(match matched {
            Some(matched) => PermissionCheck {
                granted: true,
                matched: Some(matched),
                denial_reason: None,
            },
            None => PermissionCheck {
                granted: false,
                matched: None,
                denial_reason: Some(format!("Missing permission {} on {}", action, resource)),
            },
        })
    }

    /// Keep the ids of `resource_type` on which `action` is allowed, in input
    /// order
    pub async fn filter_accessible(
        &self,
        user_id: UserId,
        action: &str,
        resource_type: ResourceType,
        resource_ids: &[ResourceId],
    ) -> Result<Vec<ResourceId>> {
        validate_action(action)?;
        let resources = resource_ids
            .iter()
            .map(|id| ResourceRef::new(resource_type, *id))
            .collect::<Result<Vec<_>>>()?;

        let resolved = try_join_all(
            resources
                .iter()
                .map(|resource| self.resolve_permissions(user_id, *resource)),
        )
        .await?;

        Ok(resources
            .iter()
            .zip(resolved)
            .filter(|(_, actions)| allows(actions, action))
            .map(|(resource, _)| resource.id)
            .collect())
    }

    /// The full inheritance-flattened action set of `user_id` on `resource`
    pub async fn resolve_permissions(
        &self,
        user_id: UserId,
        resource: ResourceRef,
    ) -> Result<ActionSet> {
        self.resolve_at(user_id, resource, 0).await
    }

    /// One level of the walk: cache, direct grants, then the parent.
    /// `depth` counts parent hops from the node the caller asked about.
    fn resolve_at(
        &self,
        user_id: UserId,
        resource: ResourceRef,
        depth: usize,
    ) -> ResolveFuture<'_> {
        Box::pin(async move {
            let key = CacheKey::new(user_id, resource);
            if let Some(actions) = self.cache.get(&key) {
                return Ok(actions);
            }

            let mut actions = HashSet::new();
            let grants = self.grants.find_grants(user_id, resource).await?;
            debug!(
                "User {} has {} direct grants on {}",
                user_id,
                grants.len(),
                resource
            );
            for grant in grants {
                actions.extend(grant.permissions);
            }

            if let Some(parent) = self.hierarchy.parent_of(resource).await?.parent() {
                if depth >= MAX_HIERARCHY_DEPTH {
                    return Err(AuthzError::hierarchy_depth(format!(
                        "{} is more than {} levels below System",
                        resource, MAX_HIERARCHY_DEPTH
                    )));
                }
                let inherited = self.resolve_at(user_id, parent, depth + 1).await?;
                actions.extend(inherited.iter().cloned());
            }

            let actions: ActionSet = Arc::new(actions);
            self.cache.insert(key, actions.clone());
            Ok(actions)
        })
    }

    /// Drop cached sets for one user. Call after any grant change for that user.
    pub fn invalidate_cache(&self, user_id: UserId) -> usize {
        self.cache.invalidate_user(user_id)
    }

    /// Drop cached sets for every holder of `role_id`. Call after the role's
    /// permission set changes.
    pub async fn invalidate_role(&self, role_id: RoleId) -> Result<usize> {
        let holders = self.grants.find_role_holders(role_id).await?;
        info!(
            "Invalidating permission cache for {} holders of role {}",
            holders.len(),
            role_id
        );
        Ok(holders
            .into_iter()
            .map(|user_id| self.cache.invalidate_user(user_id))
            .sum())
    }

    /// Drop every cached set
    pub fn invalidate_all(&self) -> usize {
        self.cache.invalidate_all()
    }
}

fn allows(actions: &HashSet<String>, action: &str) -> bool {
    actions.contains(action) || actions.contains(GLOBAL_WILDCARD)
}

fn validate_action(action: &str) -> Result<()> {
    if action.trim().is_empty() {
        return Err(AuthzError::validation("Action must not be empty"));
    }
    Ok(())
}

fn validate_actions(actions: &[&str]) -> Result<()> {
    if actions.is_empty() {
        return Err(AuthzError::validation("Action list must not be empty"));
    }
    actions.iter().try_for_each(|a| validate_action(a))
}
