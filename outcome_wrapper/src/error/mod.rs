//! Errors reported when the outcome factory is called with invalid arguments.

use thiserror::Error;

/// Misuse of an outcome factory call.
///
/// This is the caller-bug channel: it is returned instead of an outcome and
/// never stands in for a failed operation. Failed operations are reported as
/// a [`FailureOutcome`](crate::FailureOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArgumentError {
    /// A single message was empty or contained only whitespace.
    #[error("argument '{argument}' must not be empty or whitespace")]
    BlankMessage {
        /// Name of the rejected argument.
        argument: &'static str,
    },
}

impl ArgumentError {
    /// Name of the argument that was rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_wrapper::Outcome;
    ///
    /// let err = Outcome::fail_with_message("   ").unwrap_err();
    /// assert_eq!(err.argument(), "message");
    /// ```
    #[must_use]
    pub const fn argument(&self) -> &'static str {
        match *self {
            Self::BlankMessage { argument } => argument,
        }
    }
}

/// Result of a factory call that validates its arguments.
pub type ArgumentResult<T> = Result<T, ArgumentError>;

#[cfg(test)]
mod tests;
