//! Unit tests for argument error reporting.

use rstest::rstest;

use super::ArgumentError;

#[rstest]
fn blank_message_names_the_argument() {
    let err = ArgumentError::BlankMessage {
        argument: "message",
    };

    assert_eq!(err.argument(), "message");
    assert_eq!(
        err.to_string(),
        "argument 'message' must not be empty or whitespace"
    );
}

#[rstest]
fn argument_errors_are_std_errors() {
    let err: Box<dyn std::error::Error + Send + Sync> = Box::new(ArgumentError::BlankMessage {
        argument: "message",
    });

    assert!(err.source().is_none());
    assert!(err.is::<ArgumentError>());
}
