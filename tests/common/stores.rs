//! Store wrappers for failure and interleaving tests

use async_trait::async_trait;
use hierarchy_authz::{
    AuthzError, GrantStore, GrantedRole, HierarchyStore, MemoryStore, ResourceRef, ResourceType,
    Result, RoleId, UserId,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// A backend that is down
pub struct UnavailableStore;

#[async_trait]
impl GrantStore for UnavailableStore {
    async fn find_grants(
        &self,
        _user_id: UserId,
        _resource: ResourceRef,
    ) -> Result<Vec<GrantedRole>> {
        Err(AuthzError::store("grant store unavailable"))
    }

    async fn find_role_holders(&self, _role_id: RoleId) -> Result<Vec<UserId>> {
        Err(AuthzError::store("grant store unavailable"))
    }
}

#[async_trait]
impl HierarchyStore for UnavailableStore {
    async fn find_parent_project_id(&self, _module_id: i64) -> Result<Option<i64>> {
        Err(AuthzError::store("hierarchy store unavailable"))
    }

    async fn find_parent_module_id(
        &self,
        _resource_type: ResourceType,
        _resource_id: i64,
    ) -> Result<Option<i64>> {
        Err(AuthzError::store("hierarchy store unavailable"))
    }
}

/// Grant store that, once armed, holds the next `find_grants` answer until
/// released. The answer is read before pausing, so it reflects the grants
/// at the moment the call started.
pub struct GatedGrantStore {
    inner: Arc<MemoryStore>,
    armed: AtomicBool,
    reached: Notify,
    release: Notify,
}

impl GatedGrantStore {
    pub fn new(inner: Arc<MemoryStore>) -> Self {
        Self {
            inner,
            armed: AtomicBool::new(false),
            reached: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    /// Wait until the armed call has read its grants
    pub async fn wait_until_reached(&self) {
        self.reached.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl GrantStore for GatedGrantStore {
    async fn find_grants(
        &self,
        user_id: UserId,
        resource: ResourceRef,
    ) -> Result<Vec<GrantedRole>> {
        let grants = self.inner.find_grants(user_id, resource).await;
        if self.armed.swap(false, Ordering::SeqCst) {
            self.reached.notify_one();
            self.release.notified().await;
        }
        grants
    }

    async fn find_role_holders(&self, role_id: RoleId) -> Result<Vec<UserId>> {
        self.inner.find_role_holders(role_id).await
    }
}
