//! Permission resolution engine
//!
//! Computes the flattened action set a user holds on a resource by merging
//! direct grants with everything inherited from ancestors, memoized in a
//! [`PermissionCache`](crate::core::cache::PermissionCache).

mod engine;
mod types;

pub use engine::PermissionEngine;
pub use types::PermissionCheck;
