//! Parent lookup for the resource tree

use crate::storage::HierarchyStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::warn;

use super::types::{ResourceRef, ResourceType};

/// Maximum number of parent hops from any node to `System`
/// (`Document -> Module -> Project -> System`).
pub const MAX_HIERARCHY_DEPTH: usize = 3;

/// How the parent of a resource type is found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentStrategy {
    /// No parent: the walk ends here
    Root,
    /// Parent is the System singleton, no lookup needed
    System,
    /// Parent is the project owning a module
    OwningProject,
    /// Parent is the module owning a document, report or workspace
    OwningModule,
}

impl ParentStrategy {
    /// Strategy table. Adding a resource type means adding one arm here.
    pub fn for_type(resource_type: ResourceType) -> Self {
        match resource_type {
            ResourceType::System => ParentStrategy::Root,
            ResourceType::Project => ParentStrategy::System,
            ResourceType::Module => ParentStrategy::OwningProject,
            ResourceType::Document | ResourceType::Report | ResourceType::Workspace => {
                ParentStrategy::OwningModule
            }
        }
    }
}

/// Outcome of a parent lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentLookup {
    /// The resource is `System`
    Root,
    /// The parent resource
    Found(ResourceRef),
    /// The owning record is missing; inheritance stops here
    Missing,
}

impl ParentLookup {
    pub fn parent(self) -> Option<ResourceRef> {
        match self {
            ParentLookup::Found(parent) => Some(parent),
            ParentLookup::Root | ParentLookup::Missing => None,
        }
    }
}

/// Resolves the immediate parent of a resource through a [`HierarchyStore`]
#[derive(Clone)]
pub struct HierarchyResolver {
    store: Arc<dyn HierarchyStore>,
}

impl HierarchyResolver {
    pub fn new(store: Arc<dyn HierarchyStore>) -> Self {
        Self { store }
    }

    /// Find the parent of `resource`.
    ///
    /// Store failures propagate; a missing owning record does not.
    pub async fn parent_of(&self, resource: ResourceRef) -> Result<ParentLookup> {
        let parent = match ParentStrategy::for_type(resource.resource_type) {
            ParentStrategy::Root => return Ok(ParentLookup::Root),
            ParentStrategy::System => return Ok(ParentLookup::Found(ResourceRef::system())),
            ParentStrategy::OwningProject => self
                .store
                .find_parent_project_id(resource.id)
                .await?
                .map(|id| (ResourceType::Project, id)),
            ParentStrategy::OwningModule => self
                .store
                .find_parent_module_id(resource.resource_type, resource.id)
                .await?
                .map(|id| (ResourceType::Module, id)),
        };

        // Ids are positive; a zero or negative parent id means no usable parent.
        match parent {
            Some((resource_type, id)) if id > 0 => {
                Ok(ParentLookup::Found(ResourceRef { resource_type, id }))
            }
            _ => {
                warn!("No parent record for {}, inheritance stops here", resource);
                Ok(ParentLookup::Missing)
            }
        }
    }
}
