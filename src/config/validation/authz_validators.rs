//! Engine configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

/// Accepted logging levels
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Validate for PermissionCacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.ttl_secs == 0 {
            return Err("Cache TTL must be greater than 0".to_string());
        }
        if self.enabled && self.max_entries == 0 {
            return Err("Cache max_entries must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(format!(
                "Unknown log level '{}', expected one of {:?}",
                self.level, LOG_LEVELS
            ));
        }

        Ok(())
    }
}
