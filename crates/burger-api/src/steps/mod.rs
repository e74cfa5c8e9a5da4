//! Request steps, one per API resource.
//!
//! A step turns a domain intent into exactly one HTTP call and returns the
//! raw response; it never decides pass or fail itself. The paired
//! `assert_*` helpers verify one literal contract each.

mod order;
mod user;
mod user_orders;

pub use order::*;
pub use user::*;
pub use user_orders::*;
