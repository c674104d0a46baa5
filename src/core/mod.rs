//! Core functionality for the permission engine
//!
//! This module contains the resource tree, the permission catalog, the
//! resolved-permission cache and the resolution engine built on them.

pub mod cache;
pub mod catalog;
pub mod engine;
pub mod resource;
