//! Error handling utilities
//!
//! This module provides the error type shared by the resolution engine, the
//! storage adapters and the configuration layer.

pub mod error;

pub use error::*;
