//! Request steps and response contracts for the Stellar Burgers ordering API.
//!
//! This crate wraps the service's REST endpoints into named operations
//! ("steps") that return the raw response, and pairs each step with
//! assertion helpers that verify a specific success or failure contract.

pub mod assertions;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod steps;

pub use client::{ApiResponse, BurgerApiClient};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ContractViolation};
pub use model::{Ingredient, Ingredients, Order, SessionTokens, User};
pub use steps::{OrderSteps, UserOrderSteps, UserSteps};
