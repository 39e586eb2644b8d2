use thiserror::Error;

/// Errors reported by [`Comparator::try_compare`](crate::Comparator::try_compare).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("excluded field `{field}` is not a field of `{shape}`")]
    UnknownField { field: String, shape: &'static str },
}
