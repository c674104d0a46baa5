//! Helper functions for creating specific error types

use super::types::AuthzError;

impl AuthzError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn hierarchy_depth<S: Into<String>>(message: S) -> Self {
        Self::HierarchyDepth(message.into())
    }

    /// True when the backing store could not be reached or answered with an
    /// error. Callers must not treat this the same as a denied check.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// True for errors caused by the caller passing bad input
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
