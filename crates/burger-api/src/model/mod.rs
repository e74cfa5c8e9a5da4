//! Domain models exchanged with the ordering API.

mod ingredient;
mod order;
mod user;

pub use ingredient::*;
pub use order::*;
pub use user::*;
