//! struct-equal - Structural equality for test assertions.
//!
//! Compares two values of the same type while ignoring a list of named
//! top-level fields (timestamps, generated ids), and optionally replaces
//! deep equality with a caller-supplied diff function.
//!
//! Values are either *primitive* (compared as is) or *record-shaped*
//! (structs declared with [`record!`], and `Box`/`Rc`/`Arc`/`Option`
//! pointers to them). Record-shaped values are first copied with the
//! excluded fields reset to their defaults, then compared.
//!
//! ```
//! use struct_equal::{equals, record};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct User {
//!     id: u64,
//!     name: String,
//!     updated_at: u64,
//! }
//!
//! record!(User { id, name, updated_at });
//!
//! let a = User { id: 1, name: "ann".into(), updated_at: 10 };
//! let b = User { id: 1, name: "ann".into(), updated_at: 20 };
//!
//! assert!(!equals(&a, &b, &[]));
//! assert!(equals(&a, &b, &["updated_at"]));
//! ```

mod assert;
mod comparator;
mod error;
mod exclusions;
mod record;
mod shape;
mod strategy;

pub use comparator::{equals, equals_with_diff_func, Comparator};
pub use error::CompareError;
pub use exclusions::Exclusions;
pub use record::{filter_record, Record};
pub use shape::{classify_pair, Comparable, Shape};
pub use strategy::{DeepEqual, Strategy};
