//! Testing utilities for the Stellar Burgers API suites.
//!
//! This crate provides the per-test fixtures (disposable user accounts),
//! seeded test data generators, an order construction helper, a bounded
//! poll-until-ready helper and an in-process fake of the ordering service.

pub mod builders;
pub mod config;
pub mod data_generators;
pub mod error;
pub mod fake_service;
pub mod fixtures;
pub mod polling;

pub use builders::OrderBuilder;
pub use config::TestConfig;
pub use data_generators::UserDataGenerator;
pub use error::TestError;
pub use fake_service::FakeBurgerService;
pub use fixtures::UserFixture;
pub use polling::{poll_until, PollConfig};

/// Initialize tracing for tests with a default configuration.
///
/// `RUST_LOG` takes precedence over the default filter. Safe to call from
/// every test.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("burger_api=debug,burger_test_utils=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
