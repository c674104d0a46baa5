//! Concurrent use of one engine

#[cfg(test)]
mod tests {
    use crate::common::*;
    use futures::future::join_all;
    use hierarchy_authz::{PermissionEngine, ResourceType, UserId};
    use std::sync::Arc;

    const USERS: UserId = 32;

    async fn shared_engine() -> (TestWorld, Arc<PermissionEngine>) {
        let world = TestWorld::new().await;
        for user in 0..USERS {
            let role = if user % 2 == 0 { "Editor" } else { "Viewer" };
            world.grant(user, role, ResourceType::Module, MODULE);
        }
        let engine = Arc::new(world.engine());
        (world, engine)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_checks_agree_with_grants() {
        let (_world, engine) = shared_engine().await;

        let handles = (0..USERS * 8).map(|i| {
            let engine = engine.clone();
            let user = i % USERS;
            tokio::spawn(async move {
                let allowed = engine
                    .check(user, "document:update", ResourceType::Document, DOCUMENT)
                    .await
                    .unwrap();
                (user, allowed)
            })
        });

        for result in join_all(handles).await {
            let (user, allowed) = result.unwrap();
            assert_eq!(allowed, user % 2 == 0, "user {}", user);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_checks_and_invalidations_interleave() {
        let (world, engine) = shared_engine().await;

        let checks = (0..USERS * 4).map(|i| {
            let engine = engine.clone();
            tokio::spawn(async move {
                engine
                    .check(i % USERS, "document:read", ResourceType::Document, DOCUMENT)
                    .await
            })
        });
        let invalidations = (0..USERS).map(|user| {
            let engine = engine.clone();
            tokio::spawn(async move { engine.invalidate_cache(user) })
        });

        let (checks, invalidations) = tokio::join!(join_all(checks), join_all(invalidations));
        for result in checks {
            // Every user can read, whatever the interleaving
            assert!(result.unwrap().unwrap());
        }
        for result in invalidations {
            result.unwrap();
        }

        // Once the grants are gone and every user is invalidated, nobody reads
        for user in 0..USERS {
            world.store.delete_user_grants(user);
            engine.invalidate_cache(user);
        }
        for user in 0..USERS {
            assert!(
                !engine
                    .check(user, "document:read", ResourceType::Document, DOCUMENT)
                    .await
                    .unwrap()
            );
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_resolution_shares_cache() {
        let (world, engine) = shared_engine().await;

        let checks = (0..64).map(|_| {
            let engine = engine.clone();
            tokio::spawn(async move {
                engine
                    .check(0, "report:read", ResourceType::Report, REPORT)
                    .await
                    .unwrap()
            })
        });
        assert!(join_all(checks).await.into_iter().all(|r| r.unwrap()));

        // One user, four tree levels: at most one entry per level
        assert_eq!(engine.cache().len(), 4);
        let queries = world.store.query_count();
        assert!(
            engine
                .check(0, "report:read", ResourceType::Report, REPORT)
                .await
                .unwrap()
        );
        assert_eq!(world.store.query_count(), queries);
    }
}
