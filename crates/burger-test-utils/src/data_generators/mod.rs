//! Test data generators for the ordering API.
//!
//! This module provides seeded generators that produce valid-by-construction
//! random account data, so every test case registers a unique user.

mod user;

// Re-export all data generators for easy access
pub use user::*;
