use std::env;

use crate::error::TestError;
use crate::polling::PollConfig;

/// Environment variable fixing the random data seed for a reproducible run.
pub const SEED_ENV: &str = "BURGER_TEST_SEED";

#[derive(Debug, Clone, Default)]
pub struct TestConfig {
    pub poll: PollConfig,
    pub seed: Option<u64>,
}

impl TestConfig {
    pub fn new(poll: PollConfig) -> Self {
        Self { poll, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reads the seed from the environment, leaving polling at its defaults.
    pub fn from_env() -> Result<Self, TestError> {
        let seed = match env::var(SEED_ENV) {
            Ok(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|e| {
                        TestError::Config(format!(
                            "{} must be an unsigned integer: {}",
                            SEED_ENV, e
                        ))
                    })?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            poll: PollConfig::default(),
            seed,
        })
    }
}
