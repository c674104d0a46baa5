//! Resource type definitions

use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User identifier
pub type UserId = i64;
/// Role identifier
pub type RoleId = i64;
/// Resource identifier
pub type ResourceId = i64;

/// Id of the singleton System resource
pub const SYSTEM_RESOURCE_ID: ResourceId = 0;

/// Kind of resource in the containment tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    System,
    Project,
    Module,
    Document,
    Report,
    Workspace,
}

impl ResourceType {
    /// Every resource type, root first
    pub const ALL: [ResourceType; 6] = [
        ResourceType::System,
        ResourceType::Project,
        ResourceType::Module,
        ResourceType::Document,
        ResourceType::Report,
        ResourceType::Workspace,
    ];

    /// Static parent type. `None` only for `System`.
    pub fn parent_type(self) -> Option<ResourceType> {
        match self {
            ResourceType::System => None,
            ResourceType::Project => Some(ResourceType::System),
            ResourceType::Module => Some(ResourceType::Project),
            ResourceType::Document | ResourceType::Report | ResourceType::Workspace => {
                Some(ResourceType::Module)
            }
        }
    }

    /// Number of parent hops between this type and `System`
    pub fn depth(self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(parent) = current.parent_type() {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Canonical name, as stored in grant records
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::System => "System",
            ResourceType::Project => "Project",
            ResourceType::Module => "Module",
            ResourceType::Document => "Document",
            ResourceType::Report => "Report",
            ResourceType::Workspace => "Workspace",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AuthzError::validation(format!("Unknown resource type: {}", s)))
    }
}

/// Address of one node in the resource tree
///
/// Non-System resources are expected to carry a real positive id; id `0` is
/// reserved for System and is not rejected for other types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    pub resource_type: ResourceType,
    pub id: ResourceId,
}

impl ResourceRef {
    /// Build a reference, rejecting negative ids.
    ///
    /// System is a singleton, so any System reference is normalised to id 0.
    pub fn new(resource_type: ResourceType, id: ResourceId) -> Result<Self> {
        if id < 0 {
            return Err(AuthzError::validation(format!(
                "Negative resource id {} for {}",
                id, resource_type
            )));
        }

        let id = match resource_type {
            ResourceType::System => SYSTEM_RESOURCE_ID,
            _ => id,
        };

        Ok(Self { resource_type, id })
    }

    /// The System root
    pub fn system() -> Self {
        Self {
            resource_type: ResourceType::System,
            id: SYSTEM_RESOURCE_ID,
        }
    }

    pub fn is_root(&self) -> bool {
        self.resource_type == ResourceType::System
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource_type, self.id)
    }
}
