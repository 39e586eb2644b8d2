//! Property tests for reflexivity, exclusion correctness and strategy
//! override.

use proptest::prelude::*;
use struct_equal::{equals, equals_with_diff_func, record};

#[derive(Debug, Clone, Default, PartialEq)]
struct Nested {
    d: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Sample {
    a: i64,
    b: String,
    c: Nested,
}

record!(Nested { d });
record!(Sample { a, b, c });

const NAMES: &[&str] = &["a", "b", "c", "d", "c.d", "unknown"];

fn sample() -> impl Strategy<Value = Sample> {
    (any::<i64>(), "[a-z]{0,8}", any::<i32>()).prop_map(|(a, b, d)| Sample {
        a,
        b,
        c: Nested { d },
    })
}

fn exclusions() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(NAMES.to_vec(), 0..=NAMES.len())
}

proptest! {
    #[test]
    fn reflexive_records(x in sample(), excluded in exclusions()) {
        prop_assert!(equals(&x, &x, &excluded));
        prop_assert!(equals(&Box::new(x.clone()), &Box::new(x), &excluded));
    }

    #[test]
    fn reflexive_primitives(s in ".*", n in any::<u64>(), excluded in exclusions()) {
        prop_assert!(equals(&s, &s, &excluded));
        prop_assert!(equals(&n, &n, &excluded));
    }

    #[test]
    fn excluding_the_differing_field(x in sample(), other_b in "[A-Z]{1,8}") {
        let mut y = x.clone();
        y.b = other_b;
        prop_assert!(!equals(&x, &y, &[]));
        prop_assert!(equals(&x, &y, &["b"]));
        prop_assert!(!equals(&x, &y, &["a", "c"]));
    }

    #[test]
    fn nested_difference_needs_top_level_name(x in sample(), delta in 1i32..1000) {
        let mut y = x.clone();
        y.c.d = x.c.d.wrapping_add(delta);
        prop_assert!(!equals(&x, &y, &["d", "c.d"]));
        prop_assert!(equals(&x, &y, &["c"]));
    }

    #[test]
    fn diff_func_verdict_is_returned(
        x in sample(),
        y in sample(),
        excluded in exclusions(),
        verdict in any::<bool>()
    ) {
        prop_assert_eq!(equals_with_diff_func(&x, &y, &excluded, |_, _| verdict), verdict);
    }

    #[test]
    fn diff_func_sees_what_equals_would(x in sample(), y in sample(), excluded in exclusions()) {
        let by_fn = equals_with_diff_func(&x, &y, &excluded, |l, r| l == r);
        prop_assert_eq!(by_fn, equals(&x, &y, &excluded));
    }
}
