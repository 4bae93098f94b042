//! `rstest` fixtures shared by outcome tests.
#![allow(missing_docs, reason = "rstest fixture expansion")]

use rstest::fixture;

use crate::errors::SampleError;

/// The error most failure tests attach.
#[fixture]
pub fn sample_error() -> SampleError {
    SampleError::new("Expected message")
}

/// Two distinct messages in a fixed order.
#[fixture]
pub fn ordered_messages() -> Vec<String> {
    vec!["Message 1".to_owned(), "Message 2".to_owned()]
}

/// A single non-blank message.
#[fixture]
pub fn message() -> &'static str {
    "My message"
}
