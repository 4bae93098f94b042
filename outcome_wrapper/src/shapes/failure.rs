//! Failed outcome shape.

use std::{fmt, marker::PhantomData};

use crate::ErrorObject;

/// A failed outcome with an optional underlying error and messages.
///
/// `T` names the payload a success would have carried. A failure holds no
/// value of that type and offers no way to read one:
///
/// ```compile_fail
/// use outcome_wrapper::OutcomeOf;
///
/// let failed = OutcomeOf::<String>::fail();
/// let _ = failed.data();
/// ```
///
/// The non-generic failure produced by [`Outcome`](crate::Outcome) is
/// `FailureOutcome<()>`.
pub struct FailureOutcome<T = ()> {
    error: Option<ErrorObject>,
    messages: Vec<String>,
    payload: PhantomData<fn() -> T>,
}

impl<T> FailureOutcome<T> {
    pub(crate) const fn new(error: Option<ErrorObject>, messages: Vec<String>) -> Self {
        Self {
            error,
            messages,
            payload: PhantomData,
        }
    }

    /// Always `false`.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        false
    }

    /// Messages attached at construction, in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The underlying error, if the failure was built with one.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorObject> {
        self.error.as_ref()
    }

    /// Split the failure into its error and messages.
    #[must_use]
    pub fn into_parts(self) -> (Option<ErrorObject>, Vec<String>) {
        (self.error, self.messages)
    }

    /// Re-type the failure for a caller expecting a different payload.
    ///
    /// The error and messages move across unchanged.
    ///
    /// ```
    /// use outcome_wrapper::{FailureOutcome, OutcomeOf};
    ///
    /// let lookup: FailureOutcome<u64> = OutcomeOf::fail_with_messages(["no such user"]);
    /// let render: FailureOutcome<String> = lookup.cast();
    /// assert_eq!(render.messages(), ["no such user"]);
    /// ```
    #[must_use]
    pub fn cast<U>(self) -> FailureOutcome<U> {
        FailureOutcome::new(self.error, self.messages)
    }

    /// Forget the payload type, yielding a non-generic failure.
    #[must_use]
    pub fn into_untyped(self) -> FailureOutcome {
        self.cast()
    }
}

impl<T> Clone for FailureOutcome<T> {
    fn clone(&self) -> Self {
        Self::new(self.error.clone(), self.messages.clone())
    }
}

impl<T> fmt::Debug for FailureOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureOutcome")
            .field("error", &self.error)
            .field("messages", &self.messages)
            .finish()
    }
}
