//! The two concrete outcome shapes and the read-only view they share.

mod failure;
mod success;

pub use failure::FailureOutcome;
pub use success::SuccessOutcome;

/// Either outcome of an operation that carries `T` on success.
///
/// Returning this alias keeps the success and failure shapes distinct while
/// letting callers branch with `match`, `?` or any other [`Result`] idiom.
///
/// # Examples
///
/// ```
/// use outcome_wrapper::{OutcomeOf, OutcomeResult, OutcomeView};
///
/// fn halve(value: u32) -> OutcomeResult<u32> {
///     if value % 2 == 0 {
///         Ok(OutcomeOf::success(value / 2))
///     } else {
///         Err(OutcomeOf::fail_with_messages([format!("{value} is odd")]))
///     }
/// }
///
/// match halve(8) {
///     Ok(success) => assert_eq!(*success.data(), 4),
///     Err(failure) => panic!("unexpected failure: {:?}", failure.messages()),
/// }
/// assert!(!halve(3).succeeded());
/// ```
pub type OutcomeResult<T = ()> = Result<SuccessOutcome<T>, FailureOutcome<T>>;

mod sealed {
    /// Implemented only by the outcome shapes.
    pub trait Sealed {}

    impl<T> Sealed for super::SuccessOutcome<T> {}
    impl<T> Sealed for super::FailureOutcome<T> {}
    impl<T> Sealed for super::OutcomeResult<T> {}
}

/// Read-only accessors shared by every outcome.
///
/// This trait is sealed; the only implementors are [`SuccessOutcome`],
/// [`FailureOutcome`] and [`OutcomeResult`].
pub trait OutcomeView: sealed::Sealed {
    /// Whether the outcome is a success.
    fn succeeded(&self) -> bool;

    /// Messages attached at construction, in insertion order.
    fn messages(&self) -> &[String];
}

impl<T> OutcomeView for SuccessOutcome<T> {
    fn succeeded(&self) -> bool {
        true
    }

    fn messages(&self) -> &[String] {
        Self::messages(self)
    }
}

impl<T> OutcomeView for FailureOutcome<T> {
    fn succeeded(&self) -> bool {
        false
    }

    fn messages(&self) -> &[String] {
        Self::messages(self)
    }
}

impl<T> OutcomeView for OutcomeResult<T> {
    fn succeeded(&self) -> bool {
        self.is_ok()
    }

    fn messages(&self) -> &[String] {
        match self {
            Ok(success) => success.messages(),
            Err(failure) => failure.messages(),
        }
    }
}

#[cfg(test)]
mod tests;
