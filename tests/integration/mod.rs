//! Integration tests
//!
//! End-to-end checks through the public engine API over a seeded
//! in-memory store.

pub mod concurrency_tests;
pub mod scenario_tests;
pub mod seeding_tests;
