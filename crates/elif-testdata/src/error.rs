//! Error types for test data construction

use thiserror::Error;

/// Errors raised while building or customizing test data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TestDataError {
    #[error("Missing target: cannot customize an absent object")]
    MissingTarget,

    #[error("Missing customizations: the customization sequence is absent")]
    MissingCustomizations,

    #[error("Missing customization at position {index}")]
    MissingCustomization { index: usize },

    #[error("Batch size {requested} exceeds the configured maximum of {max}")]
    BatchTooLarge { requested: usize, max: usize },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TestDataError {
    /// Whether this error stems from an absent object or function reference
    pub fn is_missing_reference(&self) -> bool {
        matches!(
            self,
            TestDataError::MissingTarget
                | TestDataError::MissingCustomizations
                | TestDataError::MissingCustomization { .. }
        )
    }
}

pub type TestDataResult<T> = Result<T, TestDataError>;
