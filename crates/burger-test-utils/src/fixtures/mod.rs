//! Per-test fixtures.

mod user;

pub use user::UserFixture;
