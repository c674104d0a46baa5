//! Error type definitions

use thiserror::Error;

/// Result type alias for the permission engine
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for the permission engine
///
/// A denied permission is never an error: `check` answers `false`. These
/// variants are reserved for cases where no answer could be computed.
#[derive(Error, Debug)]
pub enum AuthzError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller contract violations (negative ids, unknown resource types, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Grant store, hierarchy store or catalog query failures
    #[error("Store error: {0}")]
    Store(String),

    /// Catalog lookups that found nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// The parent walk went deeper than the resource tree allows
    #[error("Hierarchy depth exceeded: {0}")]
    HierarchyDepth(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
