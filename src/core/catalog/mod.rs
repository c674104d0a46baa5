//! Permission catalog and role seeding
//!
//! Permissions are opaque action strings such as `project:read`. Wildcards
//! are expanded when roles are seeded, so the engine only ever tests set
//! membership. The global wildcard `*` is kept as a literal sentinel.

mod seed;
mod types;
mod vocabulary;

pub use seed::{ROLE_TEMPLATES, RoleTemplate, SeedReport, seed_catalog};
pub use types::{Permission, Role};
pub use vocabulary::{
    CRUD_ACTIONS, GLOBAL_WILDCARD, RESOURCE_KINDS, expand_pattern, resource_wildcard, vocabulary,
};
