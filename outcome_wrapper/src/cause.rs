//! Shared handle to the underlying error a failure may carry.

use std::{error::Error, fmt, ops::Deref, sync::Arc};

/// An underlying error attached to a failed outcome.
///
/// The handle is reference counted, so cloning an outcome never clones the
/// error itself. Any `E: Error + Send + Sync + 'static` converts into it.
///
/// `ErrorObject` does not implement [`Error`] itself; use [`Self::as_error`]
/// or deref when a `&dyn Error` is required.
///
/// # Examples
///
/// ```
/// use outcome_wrapper::ErrorObject;
///
/// let err = ErrorObject::from(std::fmt::Error);
/// assert!(err.is::<std::fmt::Error>());
/// assert_eq!(err.to_string(), "an error occurred when formatting an argument");
/// ```
#[derive(Clone)]
pub struct ErrorObject(Arc<dyn Error + Send + Sync + 'static>);

impl ErrorObject {
    /// Borrow the wrapped error as a trait object.
    #[must_use]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Returns `true` when the wrapped error is of type `E`.
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.as_error().is::<E>()
    }

    /// Borrow the wrapped error as `E`, if that is its concrete type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.as_error().downcast_ref::<E>()
    }

    /// Returns `true` when both handles point at the same error value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> From<E> for ErrorObject
where
    E: Error + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self(Arc::new(err))
    }
}

impl Deref for ErrorObject {
    type Target = dyn Error + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        self.as_error()
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for ErrorObject {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}

impl fmt::Debug for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_error(), f)
    }
}

impl fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_error(), f)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use rstest::rstest;
    use test_helpers::errors::SampleError;

    use super::ErrorObject;

    #[rstest]
    fn downcasts_to_the_original_type() {
        let err = ErrorObject::from(SampleError::new("Expected message"));

        assert!(err.is::<SampleError>());
        assert!(!err.is::<io::Error>());
        let sample = err
            .downcast_ref::<SampleError>()
            .expect("wrapped error should downcast");
        assert_eq!(sample.message(), "Expected message");
    }

    #[rstest]
    fn clones_share_the_same_error() {
        let err = ErrorObject::from(SampleError::new("shared"));
        let clone = err.clone();
        let other = ErrorObject::from(SampleError::new("shared"));

        assert!(err.ptr_eq(&clone));
        assert!(!err.ptr_eq(&other));
    }

    #[rstest]
    fn formatting_delegates_to_the_wrapped_error() {
        let err = ErrorObject::from(io::Error::new(io::ErrorKind::NotFound, "missing file"));

        assert_eq!(err.to_string(), "missing file");
        assert!(format!("{err:?}").contains("NotFound"));
    }

    #[rstest]
    fn deref_exposes_the_error_source_chain() {
        let err = ErrorObject::from(SampleError::with_source(
            "outer",
            SampleError::new("inner"),
        ));

        let source = err.source().expect("outer error should expose its source");
        assert_eq!(source.to_string(), "inner");
    }
}
