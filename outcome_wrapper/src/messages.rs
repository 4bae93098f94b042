//! Validation and copying of the messages attached to outcomes.
//!
//! A single message must contain at least one non-whitespace character.
//! Message lists are copied as given: order and duplicates are preserved and
//! neither empty lists nor blank entries are rejected.

use crate::{ArgumentError, ArgumentResult};

/// Wrap one message, rejecting it when it is empty or whitespace-only.
pub(crate) fn single(
    argument: &'static str,
    message: impl Into<String>,
) -> ArgumentResult<Vec<String>> {
    let text = message.into();
    if text.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "outcome_wrapper::messages",
            argument,
            "rejected blank outcome message"
        );
        return Err(ArgumentError::BlankMessage { argument });
    }
    Ok(vec![text])
}

/// Copy a list of messages in iteration order.
pub(crate) fn list<I>(messages: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    messages.into_iter().map(Into::into).collect()
}
