//! Builders for request payloads used by the suites.

mod order;

// Re-export all builders for easy access
pub use order::*;
