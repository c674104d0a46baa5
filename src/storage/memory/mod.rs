//! In-memory storage backend
//!
//! Implements every store trait over `parking_lot` guarded tables, and
//! carries the resource-management writes (projects, modules, grants) that
//! the engine itself never performs.

mod impls;
mod store;

pub use store::MemoryStore;
