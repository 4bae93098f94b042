//! Factory namespaces, the only way to build outcomes.
//!
//! [`Outcome`] builds outcomes without a payload and [`OutcomeOf`] builds
//! outcomes whose success carries a `T`. Neither type can be instantiated.
//!
//! Calls taking a single message validate it and return an
//! [`ArgumentResult`]; every other call is infallible. An error argument is
//! taken by value, so there is no way to pass a missing one:
//!
//! ```compile_fail
//! use outcome_wrapper::Outcome;
//!
//! let _ = Outcome::fail_with_error(None::<std::io::Error>);
//! ```

use std::marker::PhantomData;

use crate::{ArgumentResult, ErrorObject, FailureOutcome, SuccessOutcome, messages};

/// Factory for outcomes without a payload.
///
/// # Examples
///
/// ```
/// use outcome_wrapper::Outcome;
///
/// let failure = Outcome::fail_with_messages(["Message 1", "Message 2"]);
/// assert!(!failure.succeeded());
/// assert!(failure.error().is_none());
/// assert_eq!(failure.messages(), ["Message 1", "Message 2"]);
/// ```
#[derive(Debug)]
pub enum Outcome {}

impl Outcome {
    /// A failure with no error and no messages.
    #[must_use]
    pub const fn fail() -> FailureOutcome {
        OutcomeOf::fail()
    }

    /// A failure carrying `error`.
    #[must_use]
    pub fn fail_with_error(error: impl Into<ErrorObject>) -> FailureOutcome {
        OutcomeOf::fail_with_error(error)
    }

    /// A failure carrying a single message.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::BlankMessage`](crate::ArgumentError::BlankMessage)
    /// when `message` is empty or whitespace-only.
    pub fn fail_with_message(message: impl Into<String>) -> ArgumentResult<FailureOutcome> {
        OutcomeOf::fail_with_message(message)
    }

    /// A failure carrying `messages` in iteration order.
    #[must_use]
    pub fn fail_with_messages<I>(messages: I) -> FailureOutcome
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        OutcomeOf::fail_with_messages(messages)
    }

    /// A failure carrying `error` and a single message.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::BlankMessage`](crate::ArgumentError::BlankMessage)
    /// when `message` is empty or whitespace-only.
    pub fn fail_with_error_and_message(
        error: impl Into<ErrorObject>,
        message: impl Into<String>,
    ) -> ArgumentResult<FailureOutcome> {
        OutcomeOf::fail_with_error_and_message(error, message)
    }

    /// A failure carrying `error` and `messages` in iteration order.
    #[must_use]
    pub fn fail_with_error_and_messages<I>(
        error: impl Into<ErrorObject>,
        messages: I,
    ) -> FailureOutcome
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        OutcomeOf::fail_with_error_and_messages(error, messages)
    }

    /// A success with no messages.
    #[must_use]
    pub const fn success() -> SuccessOutcome {
        OutcomeOf::success(())
    }

    /// A success carrying a single message.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::BlankMessage`](crate::ArgumentError::BlankMessage)
    /// when `message` is empty or whitespace-only.
    pub fn success_with_message(message: impl Into<String>) -> ArgumentResult<SuccessOutcome> {
        OutcomeOf::success_with_message((), message)
    }

    /// A success carrying `messages` in iteration order.
    #[must_use]
    pub fn success_with_messages<I>(messages: I) -> SuccessOutcome
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        OutcomeOf::success_with_messages((), messages)
    }
}

/// Factory for outcomes whose success carries a `T`.
///
/// Failures built here are typed by `T` but hold no value of it.
///
/// # Examples
///
/// ```
/// use outcome_wrapper::OutcomeOf;
///
/// let success = OutcomeOf::success(12.5);
/// assert_eq!(*success.data(), 12.5);
/// assert!(success.messages().is_empty());
///
/// let failure = OutcomeOf::<String>::fail();
/// assert!(!failure.succeeded());
/// assert!(failure.messages().is_empty());
/// ```
#[derive(Debug)]
pub struct OutcomeOf<T>(PhantomData<fn() -> T>);

impl<T> OutcomeOf<T> {
    /// A failure with no error and no messages.
    #[must_use]
    pub const fn fail() -> FailureOutcome<T> {
        FailureOutcome::new(None, Vec::new())
    }

    /// A failure carrying `error`.
    #[must_use]
    pub fn fail_with_error(error: impl Into<ErrorObject>) -> FailureOutcome<T> {
        FailureOutcome::new(Some(error.into()), Vec::new())
    }

    /// A failure carrying a single message.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::BlankMessage`](crate::ArgumentError::BlankMessage)
    /// when `message` is empty or whitespace-only.
    pub fn fail_with_message(message: impl Into<String>) -> ArgumentResult<FailureOutcome<T>> {
        let messages = messages::single("message", message)?;
        Ok(FailureOutcome::new(None, messages))
    }

    /// A failure carrying `messages` in iteration order.
    #[must_use]
    pub fn fail_with_messages<I>(messages: I) -> FailureOutcome<T>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        FailureOutcome::new(None, messages::list(messages))
    }

    /// A failure carrying `error` and a single message.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::BlankMessage`](crate::ArgumentError::BlankMessage)
    /// when `message` is empty or whitespace-only.
    pub fn fail_with_error_and_message(
        error: impl Into<ErrorObject>,
        message: impl Into<String>,
    ) -> ArgumentResult<FailureOutcome<T>> {
        let messages = messages::single("message", message)?;
        Ok(FailureOutcome::new(Some(error.into()), messages))
    }

    /// A failure carrying `error` and `messages` in iteration order.
    #[must_use]
    pub fn fail_with_error_and_messages<I>(
        error: impl Into<ErrorObject>,
        messages: I,
    ) -> FailureOutcome<T>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        FailureOutcome::new(Some(error.into()), messages::list(messages))
    }

    /// A success carrying `data` and no messages.
    ///
    /// `data` is stored as given; unit, empty and zero values are all valid.
    #[must_use]
    pub const fn success(data: T) -> SuccessOutcome<T> {
        SuccessOutcome::new(data, Vec::new())
    }

    /// A success carrying `data` and a single message.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::BlankMessage`](crate::ArgumentError::BlankMessage)
    /// when `message` is empty or whitespace-only. `data` is dropped in that
    /// case.
    pub fn success_with_message(
        data: T,
        message: impl Into<String>,
    ) -> ArgumentResult<SuccessOutcome<T>> {
        let messages = messages::single("message", message)?;
        Ok(SuccessOutcome::new(data, messages))
    }

    /// A success carrying `data` and `messages` in iteration order.
    #[must_use]
    pub fn success_with_messages<I>(data: T, messages: I) -> SuccessOutcome<T>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        SuccessOutcome::new(data, messages::list(messages))
    }
}
