//! Access scenarios over the fixture tree

#[cfg(test)]
mod tests {
    use crate::common::*;
    use hierarchy_authz::ResourceType;

    // ==================== Direct grants ====================

    #[tokio::test]
    async fn test_editor_on_document_reads_but_cannot_delete() {
        let world = TestWorld::new().await;
        world.grant(USER, "Editor", ResourceType::Document, DOCUMENT);
        let engine = world.engine();

        assert!(
            engine
                .check(USER, "document:read", ResourceType::Document, DOCUMENT)
                .await
                .unwrap()
        );
        assert!(
            !engine
                .check(USER, "document:delete", ResourceType::Document, DOCUMENT)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_document_grant_does_not_leak_to_siblings_or_parents() {
        let world = TestWorld::new().await;
        world.grant(USER, "Editor", ResourceType::Document, DOCUMENT);
        let engine = world.engine();

        assert!(
            !engine
                .check(USER, "module:read", ResourceType::Module, MODULE)
                .await
                .unwrap()
        );
        assert!(
            !engine
                .check(USER, "report:read", ResourceType::Report, REPORT)
                .await
                .unwrap()
        );
        assert!(
            !engine
                .check(USER, "document:read", ResourceType::Document, OTHER_DOCUMENT)
                .await
                .unwrap()
        );
    }

    // ==================== Inherited grants ====================

    #[tokio::test]
    async fn test_editor_on_module_is_inherited_by_document() {
        let world = TestWorld::new().await;
        world.grant(USER, "Editor", ResourceType::Module, MODULE);
        let engine = world.engine();

        assert!(
            engine
                .check(USER, "document:read", ResourceType::Document, DOCUMENT)
                .await
                .unwrap()
        );
        assert!(
            engine
                .check(USER, "workspace:update", ResourceType::Workspace, WORKSPACE)
                .await
                .unwrap()
        );
        assert!(
            !engine
                .check(USER, "document:delete", ResourceType::Document, DOCUMENT)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_owner_on_project_reaches_document_two_levels_down() {
        let world = TestWorld::new().await;
        world.grant(USER, "Owner", ResourceType::Project, PROJECT);
        let engine = world.engine();

        assert!(
            engine
                .check(USER, "document:delete", ResourceType::Document, DOCUMENT)
                .await
                .unwrap()
        );
        assert!(
            engine
                .check(USER, "report:delete", ResourceType::Report, REPORT)
                .await
                .unwrap()
        );
        // Owner on project 1 says nothing about project 2
        assert!(
            !engine
                .check(USER, "document:delete", ResourceType::Document, OTHER_DOCUMENT)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_super_admin_on_system_covers_every_project() {
        let world = TestWorld::new().await;
        world.grant(USER, "Super Admin", ResourceType::System, 0);
        let engine = world.engine();

        for project in [PROJECT, OTHER_PROJECT] {
            assert!(
                engine
                    .check(USER, "project:delete", ResourceType::Project, project)
                    .await
                    .unwrap()
            );
        }

        // Created after the grant and after System was cached
        world.store.insert_project(99);
        assert!(
            engine
                .check(USER, "project:delete", ResourceType::Project, 99)
                .await
                .unwrap()
        );

        world.store.insert_module(990, 99);
        assert!(
            engine
                .check(USER, "module:delete", ResourceType::Module, 990)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_user_without_grants_is_denied_everywhere() {
        let world = TestWorld::new().await;
        // Somebody else holds everything
        world.grant(OTHER_USER, "Super Admin", ResourceType::System, 0);
        let engine = world.engine();

        for node in all_nodes() {
            for action in ["*", "system:read", "project:read", "document:delete"] {
                assert!(
                    !engine
                        .check(USER, action, node.resource_type, node.id)
                        .await
                        .unwrap(),
                    "{} unexpectedly allowed on {}",
                    action,
                    node
                );
            }
        }
    }

    // ==================== Batch operations ====================

    #[tokio::test]
    async fn test_filter_accessible_keeps_only_readable_documents() {
        let world = TestWorld::new().await;
        world.grant(USER, "Viewer", ResourceType::Module, MODULE);
        let engine = world.engine();

        let accessible = engine
            .filter_accessible(
                USER,
                "document:read",
                ResourceType::Document,
                &[OTHER_DOCUMENT, DOCUMENT],
            )
            .await
            .unwrap();

        assert_eq!(accessible, vec![DOCUMENT]);
    }

    #[tokio::test]
    async fn test_check_all_and_any_for_viewer() {
        let world = TestWorld::new().await;
        world.grant(USER, "Viewer", ResourceType::Project, PROJECT);
        let engine = world.engine();

        assert!(
            engine
                .check_any(
                    USER,
                    &["document:update", "document:read"],
                    ResourceType::Document,
                    DOCUMENT,
                )
                .await
                .unwrap()
        );
        assert!(
            !engine
                .check_all(
                    USER,
                    &["document:update", "document:read"],
                    ResourceType::Document,
                    DOCUMENT,
                )
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_check_detailed_reports_matching_action() {
        let world = TestWorld::new().await;
        world.grant(USER, "Owner", ResourceType::Module, MODULE);
        let engine = world.engine();

        let allowed = engine
            .check_detailed(USER, "report:delete", ResourceType::Report, REPORT)
            .await
            .unwrap();
        assert!(allowed.granted);
        assert_eq!(allowed.matched.as_deref(), Some("*"));

        let denied = engine
            .check_detailed(USER, "project:read", ResourceType::Project, PROJECT)
            .await
            .unwrap();
        assert!(!denied.granted);
        assert_eq!(
            denied.denial_reason.as_deref(),
            Some("Missing permission project:read on Project:1")
        );
    }
}
