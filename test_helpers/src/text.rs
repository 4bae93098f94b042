//! Assertions over outcome message lists.

/// Asserts that `actual` holds exactly `expected`, in the same order.
///
/// # Panics
///
/// Panics with both lists rendered when they differ.
#[track_caller]
pub fn assert_messages<S>(actual: &[String], expected: &[S])
where
    S: AsRef<str>,
{
    let matches = actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(got, want)| got.as_str() == AsRef::<str>::as_ref(want));
    assert!(
        matches,
        "messages differ\n  actual: {actual:?}\nexpected: {:?}",
        expected
            .iter()
            .map(AsRef::<str>::as_ref)
            .collect::<Vec<&str>>()
    );
}

/// Inputs that every single-message factory call rejects.
#[must_use]
pub const fn blank_messages() -> [&'static str; 5] {
    ["", " ", "   ", "\t", "\r\n"]
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{assert_messages, blank_messages};

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|&value| value.to_owned()).collect()
    }

    #[rstest]
    #[case::empty(&[], &[])]
    #[case::ordered(&["a", "b"], &["a", "b"])]
    fn matching_lists_pass(#[case] actual: &[&str], #[case] expected: &[&str]) {
        assert_messages(&owned(actual), expected);
    }

    #[rstest]
    #[case::reordered(&["a", "b"], &["b", "a"])]
    #[case::missing_entry(&[], &["a"])]
    #[case::extra_entry(&["a", "b"], &["a"])]
    #[should_panic(expected = "messages differ")]
    fn differing_lists_fail(#[case] actual: &[&str], #[case] expected: &[&str]) {
        assert_messages(&owned(actual), expected);
    }

    #[rstest]
    fn blank_inputs_are_all_whitespace() {
        assert!(blank_messages().iter().all(|value| value.trim().is_empty()));
    }
}
