//! Test-suite macros over [`equals`](crate::equals).

/// Variadic form of [`equals`](crate::equals): excluded field names follow
/// the two values.
///
/// ```
/// use struct_equal::{equals, record};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Session {
///     user: String,
///     token: String,
///     started_at: u64,
/// }
///
/// record!(Session { user, token, started_at });
///
/// let a = Session { user: "u".into(), token: "t1".into(), started_at: 1 };
/// let b = Session { user: "u".into(), token: "t2".into(), started_at: 2 };
/// assert!(!equals!(a, b, "token"));
/// assert!(equals!(a, b, "token", "started_at"));
/// ```
#[macro_export]
macro_rules! equals {
    ($expected:expr, $actual:expr $(, $field:expr)* $(,)?) => {
        $crate::equals(&$expected, &$actual, &[$($field),*])
    };
}

/// Asserts that two values are equal with the given fields excluded.
///
/// On failure, panics with the excluded names and the `Debug` output of
/// both values.
#[macro_export]
macro_rules! assert_equals {
    ($expected:expr, $actual:expr $(, $field:expr)* $(,)?) => {
        match (&$expected, &$actual) {
            (expected, actual) => {
                let excluded: &[&str] = &[$($field),*];
                if !$crate::equals(expected, actual, excluded) {
                    ::core::panic!(
                        "assertion `equals(expected, actual)` failed\n excluded: {:?}\n expected: {:?}\n   actual: {:?}",
                        excluded,
                        expected,
                        actual,
                    );
                }
            }
        }
    };
}

/// Asserts that two values differ even with the given fields excluded.
#[macro_export]
macro_rules! assert_not_equals {
    ($expected:expr, $actual:expr $(, $field:expr)* $(,)?) => {
        match (&$expected, &$actual) {
            (expected, actual) => {
                let excluded: &[&str] = &[$($field),*];
                if $crate::equals(expected, actual, excluded) {
                    ::core::panic!(
                        "assertion `!equals(expected, actual)` failed\n excluded: {:?}\n expected: {:?}\n   actual: {:?}",
                        excluded,
                        expected,
                        actual,
                    );
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Row {
        key: String,
        version: u32,
    }

    crate::record!(Row { key, version });

    fn row(version: u32) -> Row {
        Row {
            key: "k".to_string(),
            version,
        }
    }

    #[test]
    fn equals_macro_without_fields() {
        assert!(crate::equals!(row(1), row(1)));
        assert!(!crate::equals!(row(1), row(2)));
        assert!(crate::equals!(row(1), row(2), "version",));
    }

    #[test]
    fn assert_macros_pass() {
        crate::assert_equals!(row(1), row(5), "version");
        crate::assert_not_equals!(row(1), row(5));
        crate::assert_equals!("abc", "abc");
    }

    #[test]
    #[should_panic(expected = "excluded: [\"key\"]")]
    fn assert_equals_reports_exclusions() {
        crate::assert_equals!(row(1), row(2), "key");
    }

    #[test]
    #[should_panic(expected = "assertion `!equals(expected, actual)` failed")]
    fn assert_not_equals_panics_on_equal_values() {
        crate::assert_not_equals!(row(3), row(4), "version");
    }
}
