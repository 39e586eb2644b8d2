//! Equality evaluator and its entry points.

use tracing::{debug, trace};

use crate::error::CompareError;
use crate::exclusions::Exclusions;
use crate::shape::{classify_pair, Comparable, Shape};
use crate::strategy::{DeepEqual, Strategy};

fn evaluate<T, S>(expected: &T, actual: &T, excluded: &Exclusions<'_>, strategy: &S) -> bool
where
    T: Comparable,
    S: Strategy<T> + ?Sized,
{
    let shape = classify_pair(expected, actual);
    let verdict = match shape {
        Shape::Primitive => strategy.compare(expected, actual),
        Shape::Record => {
            let expected = expected.filtered(excluded);
            let actual = actual.filtered(excluded);
            strategy.compare(&expected, &actual)
        }
    };
    trace!(
        shape = ?shape,
        excluded = excluded.len(),
        verdict,
        "compared values"
    );
    verdict
}

/// Deep equality of `expected` and `actual` with the named top-level
/// fields ignored.
///
/// Field names only apply when both values are record-shaped; for
/// primitives they are ignored, as are names that are not fields of the
/// record.
pub fn equals<T>(expected: &T, actual: &T, excluded: &[&str]) -> bool
where
    T: Comparable + PartialEq,
{
    evaluate(expected, actual, &Exclusions::new(excluded), &DeepEqual)
}

/// Like [`equals`], with `diff_fn` in place of deep equality.
///
/// `diff_fn` receives the filtered copies when both sides are
/// record-shaped, and the raw values otherwise.
pub fn equals_with_diff_func<T, F>(
    expected: &T,
    actual: &T,
    excluded: &[&str],
    diff_fn: F,
) -> bool
where
    T: Comparable,
    F: Fn(&T, &T) -> bool,
{
    evaluate(expected, actual, &Exclusions::new(excluded), &diff_fn)
}

/// Reusable comparison settings: an exclusion set, a strategy and an
/// optional strict check of the excluded names.
///
/// ```
/// use struct_equal::{record, Comparator};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Event {
///     id: u64,
///     kind: String,
///     emitted_at: u64,
/// }
///
/// record!(Event { id, kind, emitted_at });
///
/// let cmp = Comparator::new().exclude("id").exclude("emitted_at");
/// let a = Event { id: 1, kind: "open".into(), emitted_at: 100 };
/// let b = Event { id: 2, kind: "open".into(), emitted_at: 250 };
/// assert!(cmp.compare(&a, &b));
///
/// let typo = Comparator::new().exclude("emited_at").strict();
/// assert!(typo.try_compare(&a, &b).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Comparator<'a, S = DeepEqual> {
    excluded: Exclusions<'a>,
    strategy: S,
    strict: bool,
}

impl<'a> Comparator<'a> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a, S> Comparator<'a, S> {
    pub fn exclude(mut self, field: &'a str) -> Self {
        self.excluded.insert(field);
        self
    }

    pub fn exclude_all<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for field in fields {
            self.excluded.insert(field);
        }
        self
    }

    /// Makes [`try_compare`](Comparator::try_compare) reject excluded names
    /// that are not fields of the compared record.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Replaces the strategy. Closure parameter types usually need to be
    /// spelled out, e.g. `|a: &Event, b: &Event| a.kind == b.kind`.
    pub fn with_diff_func<F>(self, diff_fn: F) -> Comparator<'a, F> {
        Comparator {
            excluded: self.excluded,
            strategy: diff_fn,
            strict: self.strict,
        }
    }

    pub fn excluded(&self) -> &Exclusions<'a> {
        &self.excluded
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Verdict for the pair. Unknown excluded names are ignored here even
    /// in strict mode.
    pub fn compare<T>(&self, expected: &T, actual: &T) -> bool
    where
        T: Comparable,
        S: Strategy<T>,
    {
        evaluate(expected, actual, &self.excluded, &self.strategy)
    }

    /// Verdict for the pair, or [`CompareError::UnknownField`] when strict,
    /// both values are record-shaped, and an excluded name is not one of
    /// the record's fields.
    pub fn try_compare<T>(&self, expected: &T, actual: &T) -> Result<bool, CompareError>
    where
        T: Comparable,
        S: Strategy<T>,
    {
        if self.strict && classify_pair(expected, actual).is_record() {
            let fields = expected.field_names();
            if let Some(field) = self.excluded.unknown_in(fields).next() {
                let shape = std::any::type_name::<T>();
                debug!(field, shape, "rejected unknown excluded field");
                return Err(CompareError::UnknownField {
                    field: field.to_string(),
                    shape,
                });
            }
        }
        Ok(self.compare(expected, actual))
    }
}
