//! Record shapes and filtered copies.

use crate::exclusions::Exclusions;

/// A struct with named fields the comparator can copy field by field.
///
/// Implement it with [`record!`](crate::record) rather than by hand.
pub trait Record: Default {
    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Clones `field` from `source` into `self`. Returns `false` when the
    /// name is not one of [`FIELDS`](Record::FIELDS).
    fn copy_field(&mut self, source: &Self, field: &str) -> bool;
}

/// Builds a copy of `source` where every field named in `excluded` keeps
/// its default value and every other field is cloned.
///
/// Only top-level names are matched: a nested record field is cloned as a
/// whole, so `"inner"` excludes it but `"inner.value"` or `"value"` does
/// not reach into it. Names that are not fields of `R` are ignored.
pub fn filter_record<R: Record>(source: &R, excluded: &Exclusions<'_>) -> R {
    let mut copy = R::default();
    for field in R::FIELDS {
        if excluded.contains(field) {
            continue;
        }
        let copied = copy.copy_field(source, field);
        debug_assert!(copied, "declared field `{field}` was not copied");
    }
    copy
}

/// Declares a struct as record-shaped by listing its fields.
///
/// Generates [`Record`] and [`Comparable`](crate::Comparable) for the type.
/// The struct must implement `Default`, and each listed field must be
/// `Clone`. Every field has to be listed exactly as declared: naming a
/// field that does not exist, or leaving one out, fails to compile.
///
/// ```
/// use struct_equal::{equals, record};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Order {
///     id: u32,
///     total: u64,
/// }
///
/// record!(Order { id, total });
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Tagged<T> {
///     tag: String,
///     value: T,
/// }
///
/// record!([T: Clone + Default] Tagged<T> { tag, value });
///
/// let a = Tagged { tag: "a".to_string(), value: Order { id: 1, total: 5 } };
/// let b = Tagged { tag: "b".to_string(), value: Order { id: 1, total: 5 } };
/// assert!(equals(&a, &b, &["tag"]));
/// ```
#[macro_export]
macro_rules! record {
    ([$($generics:tt)*] $ty:ty { $($field:ident),* $(,)? }) => {
        impl<$($generics)*> $crate::Record for $ty {
            const FIELDS: &'static [&'static str] = &[$(::core::stringify!($field)),*];

            fn copy_field(&mut self, source: &Self, field: &str) -> bool {
                let Self { $($field: _),* } = source;
                match field {
                    $(
                        ::core::stringify!($field) => {
                            self.$field = ::core::clone::Clone::clone(&source.$field);
                            true
                        }
                    )*
                    _ => false,
                }
            }
        }

        impl<$($generics)*> $crate::Comparable for $ty {
            fn shape(&self) -> $crate::Shape {
                $crate::Shape::Record
            }

            fn field_names(&self) -> &'static [&'static str] {
                <Self as $crate::Record>::FIELDS
            }

            fn filtered(&self, excluded: &$crate::Exclusions<'_>) -> Self {
                $crate::filter_record(self, excluded)
            }
        }
    };
    ($ty:ty { $($field:ident),* $(,)? }) => {
        $crate::record!([] $ty { $($field),* });
    };
}
