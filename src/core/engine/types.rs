//! Engine result types

use serde::{Deserialize, Serialize};

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// The action string that granted it: the action itself or `*`
    pub matched: Option<String>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
