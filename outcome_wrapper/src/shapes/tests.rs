//! Unit tests for the outcome shapes and their shared view.

use std::sync::Mutex;

use rstest::rstest;
use test_helpers::errors::SampleError;

use super::{FailureOutcome, OutcomeResult, OutcomeView, SuccessOutcome};
use crate::ErrorObject;

fn messages(values: &[&str]) -> Vec<String> {
    values.iter().map(|&value| value.to_owned()).collect()
}

#[rstest]
fn success_exposes_data_and_messages() {
    let outcome = SuccessOutcome::new(7_u8, messages(&["first", "second"]));

    assert!(outcome.succeeded());
    assert_eq!(*outcome.data(), 7);
    assert_eq!(outcome.messages(), ["first", "second"]);
    assert_eq!(outcome.into_parts(), (7, messages(&["first", "second"])));
}

#[rstest]
fn discarding_data_keeps_messages() {
    let typed = SuccessOutcome::new(String::from("payload"), messages(&["kept"]));

    let untyped: SuccessOutcome = typed.discard_data();

    assert_eq!(untyped.messages(), ["kept"]);
}

#[rstest]
fn failure_exposes_error_and_messages() {
    let error = ErrorObject::from(SampleError::new("boom"));
    let outcome: FailureOutcome<u32> = FailureOutcome::new(Some(error.clone()), messages(&["m"]));

    assert!(!outcome.succeeded());
    assert!(outcome.error().is_some_and(|stored| stored.ptr_eq(&error)));
    assert_eq!(outcome.messages(), ["m"]);
}

#[rstest]
fn cast_moves_error_and_messages() {
    let error = ErrorObject::from(SampleError::new("boom"));
    let lookup: FailureOutcome<u64> =
        FailureOutcome::new(Some(error.clone()), messages(&["a", "b"]));

    let (cast_error, cast_messages) = lookup.cast::<String>().into_untyped().into_parts();

    assert!(cast_error.is_some_and(|stored| stored.ptr_eq(&error)));
    assert_eq!(cast_messages, ["a", "b"]);
}

#[rstest]
fn failures_clone_without_cloneable_payload() {
    let outcome: FailureOutcome<Mutex<u8>> = FailureOutcome::new(None, messages(&["copy me"]));

    let clone = outcome.clone();

    assert_eq!(clone.messages(), outcome.messages());
    assert!(clone.error().is_none());
}

#[rstest]
fn failure_debug_omits_payload_marker() {
    let outcome: FailureOutcome<Mutex<u8>> = FailureOutcome::new(None, messages(&["shown"]));

    assert_eq!(
        format!("{outcome:?}"),
        r#"FailureOutcome { error: None, messages: ["shown"] }"#
    );
}

#[rstest]
#[case(Ok(SuccessOutcome::new(1, messages(&["ok"]))), true, &["ok"])]
#[case(Err(FailureOutcome::new(None, messages(&["no", "pe"]))), false, &["no", "pe"])]
fn result_view_follows_the_variant(
    #[case] outcome: OutcomeResult<i32>,
    #[case] succeeded: bool,
    #[case] expected: &[&str],
) {
    assert_eq!(outcome.succeeded(), succeeded);
    assert_eq!(outcome.messages(), expected);
}

fn assert_send_sync<T: Send + Sync>() {}

#[rstest]
fn shapes_are_shareable_across_threads() {
    assert_send_sync::<SuccessOutcome<String>>();
    assert_send_sync::<FailureOutcome<std::rc::Rc<u8>>>();
    assert_send_sync::<OutcomeResult<Vec<u8>>>();
}
