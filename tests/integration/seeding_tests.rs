//! Catalog seeding against the in-memory store

#[cfg(test)]
mod tests {
    use hierarchy_authz::{CatalogStore, GLOBAL_WILDCARD, MemoryStore, seed_catalog};

    #[tokio::test]
    async fn test_seeding_twice_keeps_counts() {
        let store = MemoryStore::new();

        let first = seed_catalog(&store).await.unwrap();
        let permissions = store.permission_count().await.unwrap();
        let roles = store.role_count().await.unwrap();

        assert_eq!(first.permissions_created, 26);
        assert_eq!(first.roles_created, 4);
        assert_eq!(permissions, 26);
        assert_eq!(roles, 4);

        let second = seed_catalog(&store).await.unwrap();
        assert!(second.is_noop());
        assert_eq!(store.permission_count().await.unwrap(), permissions);
        assert_eq!(store.role_count().await.unwrap(), roles);
    }

    #[tokio::test]
    async fn test_seeded_roles_hold_expanded_actions() {
        let store = MemoryStore::new();
        seed_catalog(&store).await.unwrap();

        let super_admin = store.role_id("Super Admin").unwrap();
        let admin_actions = store.role_permissions(super_admin).await.unwrap();
        assert_eq!(admin_actions.len(), 1);
        assert!(admin_actions.contains(GLOBAL_WILDCARD));

        let editor = store.role_id("Editor").unwrap();
        let editor_actions = store.role_permissions(editor).await.unwrap();
        assert_eq!(editor_actions.len(), 15);
        assert!(editor_actions.contains("workspace:create"));
        assert!(!editor_actions.contains("document:delete"));
        assert!(!editor_actions.iter().any(|a| a.ends_with(":*")));

        let viewer = store.role_id("Viewer").unwrap();
        let viewer_actions = store.role_permissions(viewer).await.unwrap();
        assert_eq!(viewer_actions.len(), 5);
        assert!(viewer_actions.iter().all(|a| a.ends_with(":read")));
    }

    #[tokio::test]
    async fn test_seeding_preserves_existing_grants() {
        use hierarchy_authz::{ResourceRef, ResourceType, UserId};

        const USER: UserId = 7;
        let store = MemoryStore::new();
        seed_catalog(&store).await.unwrap();
        let viewer = store.role_id("Viewer").unwrap();
        let document = ResourceRef::new(ResourceType::Document, 5).unwrap();
        store.create_grant(USER, viewer, document).unwrap();

        seed_catalog(&store).await.unwrap();

        assert_eq!(store.role_id("Viewer"), Some(viewer));
        assert_eq!(store.grants_for_user(USER).len(), 1);
    }
}
