//! Integration tests for the `Option` combinators.

use fpkit::either::Either;
use fpkit::error::Error;
use fpkit::lens;
use fpkit::option::{self, OptionExt};
use fpkit::typeclass::{Alternative, Compactable, First, Last, Monoid, Semigroup};
use rstest::rstest;

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
#[case(Some(3), (3, true))]
#[case(None, (0, false))]
fn into_parts_reports_presence(#[case] input: Option<i32>, #[case] expected: (i32, bool)) {
    assert_eq!(input.into_parts(), expected);
}

#[rstest]
fn to_either_uses_the_fallback() {
    assert_eq!(Some(1).to_either(|| "absent"), Either::Right(1));
    assert_eq!(None::<i32>.to_either(|| "absent"), Either::Left("absent"));
}

#[rstest]
fn to_either_or_missing() {
    assert_eq!(None::<i32>.to_either_or_missing(), Either::Left(Error::MissingValue));
    assert_eq!(Some(2).to_either_or_missing(), Either::Right(2));
}

#[rstest]
fn fold_takes_none_branch_first() {
    let describe = |value: Option<u8>| value.fold(|| "empty".to_string(), |n| format!("{n} items"));
    assert_eq!(describe(Some(3)), "3 items");
    assert_eq!(describe(None), "empty");
}

#[rstest]
fn elem_compares_the_contents() {
    assert!(Some("a").elem(&"a"));
    assert!(!None::<&str>.elem(&"a"));
}

// =============================================================================
// Applicative helpers
// =============================================================================

#[rstest]
fn ap_first_and_ap_second_need_both() {
    assert_eq!(Some(1).ap_first(Some("x")), Some(1));
    assert_eq!(Some(1).ap_second(Some("x")), Some("x"));
    assert_eq!(Some(1).ap_first(None::<&str>), None);
}

#[rstest]
fn guard_and_optional() {
    assert_eq!(<Option<()>>::guard(true), Some(()));
    assert_eq!(<Option<()>>::guard(false), None);
    assert_eq!(None::<i32>.optional(), Some(None));
}

// =============================================================================
// Arrays
// =============================================================================

#[rstest]
#[case(vec![Some(1), Some(2)], Some(vec![1, 2]))]
#[case(vec![Some(1), None], None)]
#[case(vec![], Some(vec![]))]
fn sequence_array_cases(#[case] input: Vec<Option<i32>>, #[case] expected: Option<Vec<i32>>) {
    assert_eq!(option::sequence_array(input), expected);
}

#[rstest]
fn traverse_with_index_passes_positions() {
    let labelled = option::traverse_array_with_index(["x", "y"], |index, name| Some(format!("{name}{index}")));
    assert_eq!(labelled, Some(vec!["x0".to_string(), "y1".to_string()]));
}

#[rstest]
fn compact_drops_none() {
    assert_eq!(option::compact_array(vec![None, Some(1), None, Some(2)]), vec![1, 2]);
    assert_eq!(vec![Some('a'), None].compact(), vec!['a']);
    assert_eq!(Some(Some(3)).compact(), Some(3));
    assert_eq!(Some(None::<i32>).compact(), None);
}

#[rstest]
fn first_and_last_pick_the_edges() {
    let readings = vec![None, Some(3), Some(5), None];
    let first = First::combine_all(readings.iter().copied().map(First));
    let last = Last::combine_all(readings.into_iter().map(Last));
    assert_eq!(first, First(Some(3)));
    assert_eq!(last, Last(Some(5)));
}

#[rstest]
fn option_semigroup_skips_none() {
    let total = Some(String::from("a")).combine(None).combine(Some(String::from("b")));
    assert_eq!(total, Some("ab".to_string()));
}

// =============================================================================
// Recursion
// =============================================================================

#[rstest]
fn tail_rec_counts_down_to_zero() {
    let result = option::tail_rec(10_000_u32, |n| Some(if n == 0 { Either::Right("landed") } else { Either::Left(n - 1) }));
    assert_eq!(result, Some("landed"));
}

#[rstest]
fn tail_rec_gives_up_on_none() {
    let result = option::tail_rec(0_u32, |n| if n < 5 { Some(Either::<u32, u32>::Left(n + 1)) } else { None });
    assert_eq!(result, None);
}

// =============================================================================
// Do-notation
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Quote {
    base: u32,
    discount: u32,
    total: u32,
}

#[rstest]
#[case(Some(10), Some(Quote { base: 100, discount: 10, total: 90 }))]
#[case(None, None)]
fn quote_pipeline(#[case] discount: Option<u32>, #[case] expected: Option<Quote>) {
    let discount_lens = lens!(Quote, discount);
    let total_lens = lens!(Quote, total);

    let quote = option::do_(Quote { base: 100, discount: 0, total: 0 })
        .ap_s_l(&discount_lens, discount)
        .bind_l(&total_lens, |_| Some(0))
        .let_with(|quote, total| Quote { total, ..quote }, |quote| quote.base - quote.discount);

    assert_eq!(quote, expected);
}

#[rstest]
fn bind_to_then_let_to() {
    let state = Some(4)
        .bind_to(|n| (n, ""))
        .let_to(|(n, _), label| (n, label), "four");
    assert_eq!(state, Some((4, "four")));
}

// =============================================================================
// Display
// =============================================================================

#[rstest]
#[case(Some(1_u8), "Some[u8](1)")]
#[case(None, "None[u8]")]
fn display_includes_the_type(#[case] input: Option<u8>, #[case] expected: &str) {
    assert_eq!(input.display().to_string(), expected);
}

#[rstest]
fn display_renders_collection_payloads() {
    let names = Some(vec!["ada".to_string()]);
    assert_eq!(names.display().to_string(), r#"Some[Vec<String>](["ada"])"#);
    assert_eq!(None::<Vec<String>>.display().to_string(), "None[Vec<String>]");
}
