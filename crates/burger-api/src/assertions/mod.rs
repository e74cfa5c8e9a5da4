//! Assertion utilities for validating API responses.
//!
//! Each helper checks one aspect of a response and reports the first
//! mismatch as a [`ContractViolation`](crate::error::ContractViolation).
//! [`ResponseContract`] chains them into the literal contracts the steps
//! verify.

mod contract;
mod response;

pub use contract::*;
pub use response::*;
