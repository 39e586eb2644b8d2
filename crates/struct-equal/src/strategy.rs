//! Final comparison applied after any filtering.

/// Two-argument verdict over values of one type.
///
/// Implemented by [`DeepEqual`] and by every `Fn(&T, &T) -> bool`, so a
/// plain closure can be passed wherever a strategy is expected.
pub trait Strategy<T> {
    fn compare(&self, expected: &T, actual: &T) -> bool;
}

/// Structural equality through `PartialEq`.
///
/// Pointers compare their pointees and `None` equals only `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeepEqual;

impl<T: PartialEq> Strategy<T> for DeepEqual {
    fn compare(&self, expected: &T, actual: &T) -> bool {
        expected == actual
    }
}

impl<T, F> Strategy<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, expected: &T, actual: &T) -> bool {
        self(expected, actual)
    }
}
