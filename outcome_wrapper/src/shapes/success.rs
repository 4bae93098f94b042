//! Successful outcome shape.

/// A successful outcome carrying `data` and diagnostic messages.
///
/// The non-generic success produced by [`Outcome`](crate::Outcome) is
/// `SuccessOutcome<()>`. Instances are created only by the factory and are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuccessOutcome<T = ()> {
    data: T,
    messages: Vec<String>,
}

impl<T> SuccessOutcome<T> {
    pub(crate) const fn new(data: T, messages: Vec<String>) -> Self {
        Self { data, messages }
    }

    /// Always `true`.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        true
    }

    /// Messages attached at construction, in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Borrow the payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_wrapper::OutcomeOf;
    ///
    /// let outcome = OutcomeOf::success(12.5);
    /// assert_eq!(*outcome.data(), 12.5);
    /// ```
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Take the payload, dropping the messages.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }

    /// Split the outcome into its payload and messages.
    #[must_use]
    pub fn into_parts(self) -> (T, Vec<String>) {
        (self.data, self.messages)
    }

    /// Drop the payload and keep the messages as a non-generic success.
    #[must_use]
    pub fn discard_data(self) -> SuccessOutcome {
        SuccessOutcome::new((), self.messages)
    }
}
