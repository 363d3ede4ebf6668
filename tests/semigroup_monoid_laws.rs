//! Property-based tests for Semigroup and Monoid laws.
//!
//! - **Associativity**: `(a <> b) <> c == a <> (b <> c)`
//! - **Left Identity**: `empty() <> a == a`
//! - **Right Identity**: `a <> empty() == a`

use fpkit::either::Either;
use fpkit::typeclass::{Dual, First, Last, Max, Min, Monoid, Semigroup, Sum};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// First / Last
// =============================================================================

proptest! {
    #[test]
    fn prop_first_associativity(a in any::<Option<i32>>(), b in any::<Option<i32>>(), c in any::<Option<i32>>()) {
        let left = First(a).combine(First(b)).combine(First(c));
        let right = First(a).combine(First(b).combine(First(c)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_first_identity(a in any::<Option<i32>>()) {
        prop_assert_eq!(First::empty().combine(First(a)), First(a));
        prop_assert_eq!(First(a).combine(First::empty()), First(a));
    }

    #[test]
    fn prop_last_associativity(a in any::<Option<i32>>(), b in any::<Option<i32>>(), c in any::<Option<i32>>()) {
        let left = Last(a).combine(Last(b)).combine(Last(c));
        let right = Last(a).combine(Last(b).combine(Last(c)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_last_identity(a in any::<Option<i32>>()) {
        prop_assert_eq!(Last::empty().combine(Last(a)), Last(a));
        prop_assert_eq!(Last(a).combine(Last::empty()), Last(a));
    }

    #[test]
    fn prop_first_is_dual_of_last(a in any::<Option<i32>>(), b in any::<Option<i32>>()) {
        let first = First(a).combine(First(b)).0;
        let last = Dual(Last(a)).combine(Dual(Last(b))).0.0;
        prop_assert_eq!(first, last);
    }
}

// =============================================================================
// Numeric wrappers
// =============================================================================

proptest! {
    #[test]
    fn prop_sum_associativity(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let (a, b, c) = (i64::from(a), i64::from(b), i64::from(c));
        let left = Sum(a).combine(Sum(b)).combine(Sum(c));
        let right = Sum(a).combine(Sum(b).combine(Sum(c)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_max_min_identity(a in any::<i32>()) {
        prop_assert_eq!(Max::empty().combine(Max(a)), Max(a));
        prop_assert_eq!(Min(a).combine(Min::empty()), Min(a));
    }

    #[test]
    fn prop_string_combine_all_is_concat(parts in prop::collection::vec("[a-z]{0,4}", 0..6)) {
        prop_assert_eq!(String::combine_all(parts.clone()), parts.concat());
    }
}

// =============================================================================
// Either apply semigroup
// =============================================================================

fn either_strategy() -> impl Strategy<Value = Either<String, Sum<i64>>> {
    prop_oneof![
        "[a-z]{1,3}".prop_map(Either::<String, Sum<i64>>::Left),
        (-1000_i64..1000).prop_map(|n| Either::Right(Sum(n))),
    ]
}

proptest! {
    #[test]
    fn prop_either_associativity(a in either_strategy(), b in either_strategy(), c in either_strategy()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_identity(a in either_strategy()) {
        prop_assert_eq!(Either::empty().combine(a.clone()), a.clone());
        prop_assert_eq!(a.clone().combine(Either::empty()), a);
    }
}

#[rstest]
fn either_left_left_keeps_the_first_left() {
    let a: Either<String, Sum<i32>> = Either::Left("a".to_string());
    let b: Either<String, Sum<i32>> = Either::Left("b".to_string());
    assert_eq!(a.combine(b), Either::Left("a".to_string()));
}

#[rstest]
fn either_right_right_combines_contents() {
    let a: Either<String, Sum<i32>> = Either::Right(Sum(1));
    let b: Either<String, Sum<i32>> = Either::Right(Sum(2));
    assert_eq!(a.combine(b), Either::Right(Sum(3)));
}

#[rstest]
#[case(Either::Right(Sum(1)), Either::Left("b"), Either::Left("b"))]
#[case(Either::Left("a"), Either::Right(Sum(2)), Either::Left("a"))]
fn either_mixed_keeps_the_left(
    #[case] first: Either<&'static str, Sum<i32>>,
    #[case] second: Either<&'static str, Sum<i32>>,
    #[case] expected: Either<&'static str, Sum<i32>>,
) {
    assert_eq!(first.combine(second), expected);
}

#[rstest]
fn either_combine_all_of_rights() {
    let values: Vec<Either<String, Sum<i32>>> = (1..=4).map(|n| Either::Right(Sum(n))).collect();
    assert_eq!(Either::combine_all(values), Either::Right(Sum(10)));
}
