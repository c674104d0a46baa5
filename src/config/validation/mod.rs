//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `authz_validators`: Cache and logging validators
//! - `tests`: Test suite for all validators

mod authz_validators;
mod trait_def;

pub use authz_validators::LOG_LEVELS;
pub use trait_def::Validate;
