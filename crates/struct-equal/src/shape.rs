//! Classification of compared values.
//!
//! A value is record-shaped when it is a struct declared with
//! [`record!`](crate::record), or a `Box`, `Rc`, `Arc` or `Some` around a
//! record-shaped value. Everything else is primitive: scalars, strings,
//! collections, tuples, JSON values, absent options, and pointers to any of
//! those.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::exclusions::Exclusions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Compared directly, exclusions ignored.
    Primitive,
    /// Compared through filtered copies.
    Record,
}

impl Shape {
    pub fn is_record(self) -> bool {
        matches!(self, Shape::Record)
    }
}

/// A value the comparator knows how to classify and, when record-shaped,
/// how to copy with fields excluded.
///
/// Primitive implementations rely on the defaults. Record implementations
/// are generated by [`record!`](crate::record).
pub trait Comparable: Sized {
    fn shape(&self) -> Shape {
        Shape::Primitive
    }

    /// Declared field names of the record behind this value, empty for
    /// primitives.
    fn field_names(&self) -> &'static [&'static str] {
        &[]
    }

    /// Same-shape copy with every excluded field at its default.
    ///
    /// # Panics
    ///
    /// On any value whose [`shape`](Comparable::shape) is
    /// [`Shape::Primitive`]. The evaluator only filters record pairs, so
    /// reaching this is a classification bug.
    fn filtered(&self, excluded: &Exclusions<'_>) -> Self {
        let _ = excluded;
        panic!(
            "field filter invoked on primitive value of type `{}`",
            std::any::type_name::<Self>()
        )
    }
}

/// Shape of a pair: record only when both sides are record-shaped.
pub fn classify_pair<T: Comparable>(expected: &T, actual: &T) -> Shape {
    if expected.shape().is_record() && actual.shape().is_record() {
        Shape::Record
    } else {
        Shape::Primitive
    }
}

macro_rules! primitive {
    ($($ty:ty),* $(,)?) => {
        $(impl Comparable for $ty {})*
    };
}

primitive!(
    bool,
    char,
    (),
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    Duration,
    SystemTime,
    serde_json::Value,
);

impl Comparable for &str {}
impl Comparable for Cow<'_, str> {}
impl<T> Comparable for &[T] {}
impl<T> Comparable for Vec<T> {}
impl<T> Comparable for VecDeque<T> {}
impl<T, const N: usize> Comparable for [T; N] {}
impl<K, V, S> Comparable for HashMap<K, V, S> {}
impl<K, V> Comparable for BTreeMap<K, V> {}
impl<T, S> Comparable for HashSet<T, S> {}
impl<T> Comparable for BTreeSet<T> {}

macro_rules! tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(impl<$($name),+> Comparable for ($($name,)+) {})*
    };
}

tuple!((A), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, F));

macro_rules! pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Comparable> Comparable for $ptr<T> {
                fn shape(&self) -> Shape {
                    (**self).shape()
                }

                fn field_names(&self) -> &'static [&'static str] {
                    (**self).field_names()
                }

                fn filtered(&self, excluded: &Exclusions<'_>) -> Self {
                    $ptr::new((**self).filtered(excluded))
                }
            }
        )*
    };
}

pointer!(Box, Rc, Arc);

/// `None` is the absent reference: primitive, and equal only to `None`
/// under deep equality.
impl<T: Comparable> Comparable for Option<T> {
    fn shape(&self) -> Shape {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Primitive,
        }
    }

    fn field_names(&self) -> &'static [&'static str] {
        match self {
            Some(inner) => inner.field_names(),
            None => &[],
        }
    }

    fn filtered(&self, excluded: &Exclusions<'_>) -> Self {
        match self {
            Some(inner) => Some(inner.filtered(excluded)),
            None => panic!(
                "field filter invoked on absent value of type `{}`",
                std::any::type_name::<Self>()
            ),
        }
    }
}
