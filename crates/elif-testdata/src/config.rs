//! Test data configuration types and builders

use crate::{TestDataError, TestDataResult};
use serde::{Deserialize, Serialize};
use service_builder::builder;
use std::env;

/// Environment variable overriding [`TestDataConfig::max_batch_size`]
pub const MAX_BATCH_SIZE_ENV: &str = "ELIF_TESTDATA_MAX_BATCH_SIZE";

/// Default upper bound for batch construction (the full `u16` range)
pub const DEFAULT_MAX_BATCH_SIZE: usize = u16::MAX as usize;

/// Configuration for test data factories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder]
pub struct TestDataConfig {
    /// Largest number of objects a single batch call may produce
    #[builder(default = "DEFAULT_MAX_BATCH_SIZE", getter)]
    pub max_batch_size: usize,
}

impl Default for TestDataConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

impl TestDataConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> TestDataResult<Self> {
        let mut config = Self::default();

        if let Ok(value) = env::var(MAX_BATCH_SIZE_ENV) {
            config.max_batch_size =
                value
                    .trim()
                    .parse()
                    .map_err(|_| TestDataError::Configuration {
                        message: format!(
                            "{} must be a non-negative integer, got '{}'",
                            MAX_BATCH_SIZE_ENV, value
                        ),
                    })?;
        }

        Ok(config)
    }

    /// Ensure a requested batch size fits within the configured bound
    pub fn check_batch_size(&self, requested: usize) -> TestDataResult<()> {
        if requested > self.max_batch_size {
            return Err(TestDataError::BatchTooLarge {
                requested,
                max: self.max_batch_size,
            });
        }
        Ok(())
    }
}

impl TestDataConfigBuilder {
    /// Bound batches to the `u16` range
    pub fn standard() -> Self {
        TestDataConfigBuilder::new().max_batch_size(DEFAULT_MAX_BATCH_SIZE)
    }

    /// Lift the batch bound entirely
    pub fn unbounded() -> Self {
        TestDataConfigBuilder::new().max_batch_size(usize::MAX)
    }
}
