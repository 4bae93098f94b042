//! A concrete error type for exercising failures in tests.

use thiserror::Error;

/// Error with a fixed message and an optional nested source.
///
/// # Examples
///
/// ```
/// use std::error::Error as _;
/// use outcome_wrapper_test_helpers::errors::SampleError;
///
/// let err = SampleError::with_source("outer", SampleError::new("inner"));
/// assert_eq!(err.to_string(), "outer");
/// assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("inner"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SampleError {
    message: String,
    #[source]
    source: Option<Box<Self>>,
}

impl SampleError {
    /// Creates an error displaying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error displaying `message` that was caused by `source`.
    #[must_use]
    pub fn with_source(message: impl Into<String>, source: Self) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The message this error displays.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
