//! Random account data.

use std::ops::Range;

use burger_api::User;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::TestConfig;

/// Domain every generated email address belongs to.
pub const EMAIL_DOMAIN: &str = "@yandex.ru";

/// Name length bounds (upper bound exclusive).
pub const NAME_LENGTH: Range<usize> = 4..20;
/// Email local part length bounds (upper bound exclusive).
pub const EMAIL_LOCAL_LENGTH: Range<usize> = 6..10;
/// Password length bounds (upper bound exclusive).
pub const PASSWORD_LENGTH: Range<usize> = 10..20;

/// Seeded generator of random alphanumeric account data.
///
/// The same seed always yields the same sequence of users, which makes a
/// failing run reproducible.
#[derive(Debug, Clone)]
pub struct UserDataGenerator {
    rng: StdRng,
    seed: u64,
}

impl UserDataGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Picks a fresh random seed.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Uses the configured seed if there is one, and logs the seed in use.
    pub fn from_config(config: &TestConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        };
        info!(seed = generator.seed, "Random test data seed");
        generator
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random alphanumeric string with a length drawn from `length`.
    pub fn alphanumeric(&mut self, length: Range<usize>) -> String {
        let len = self.rng.gen_range(length);
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    pub fn name(&mut self) -> String {
        self.alphanumeric(NAME_LENGTH)
    }

    pub fn email(&mut self) -> String {
        format!("{}{}", self.alphanumeric(EMAIL_LOCAL_LENGTH), EMAIL_DOMAIN)
    }

    pub fn password(&mut self) -> String {
        self.alphanumeric(PASSWORD_LENGTH)
    }

    /// A complete, registrable user.
    pub fn user(&mut self) -> User {
        let name = self.name();
        let email = self.email();
        let password = self.password();
        User::new(name, email, password)
    }
}
