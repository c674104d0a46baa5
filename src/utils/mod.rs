//! Utility modules for the permission engine
//!
//! - **error**: Error type and helpers
//! - **logging**: Tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging
