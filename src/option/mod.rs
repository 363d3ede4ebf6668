//! Combinators for `std::option::Option`.
//!
//! `Option<A>` is used as-is. [`OptionExt`] adds the methods `std` lacks
//! (applicative helpers, do-notation, conversions to [`Either`], rendering and
//! logging), and the free functions below cover construction, traversal and
//! stack-safe recursion.
//!
//! The type class traits in [`crate::typeclass`] are implemented for `Option`
//! as well, including [`First`](crate::typeclass::First) and
//! [`Last`](crate::typeclass::Last) for picking the leftmost or rightmost
//! `Some`.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::option::{self, OptionExt};
//!
//! let ports = option::traverse_array(["80", "443"], |text| text.parse::<u16>().ok());
//! assert_eq!(ports, Some(vec![80, 443]));
//!
//! let rendered = Some(8080_u16).display().to_string();
//! assert_eq!(rendered, "Some[u16](8080)");
//! ```

mod ext;

pub use ext::OptionExt;

use crate::either::Either;

/// Starts a do-notation pipeline with `state`.
#[inline]
pub const fn do_<S>(state: S) -> Option<S> {
    Some(state)
}

/// Returns `Some(value)` if `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use fpkit::option;
///
/// assert_eq!(option::from_predicate(4, |n| n % 2 == 0), Some(4));
/// assert_eq!(option::from_predicate(3, |n| n % 2 == 0), None);
/// ```
#[inline]
pub fn from_predicate<A, P>(value: A, predicate: P) -> Option<A>
where
    P: FnOnce(&A) -> bool,
{
    Some(value).filter(predicate)
}

/// Applies `function` to every element, stopping at the first `None`.
pub fn traverse_array<I, A, B, F>(iterable: I, function: F) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Option<B>,
{
    iterable.into_iter().map(function).collect()
}

/// Like [`traverse_array`], passing each element's index to `function`.
pub fn traverse_array_with_index<I, A, B, F>(iterable: I, mut function: F) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(usize, A) -> Option<B>,
{
    iterable
        .into_iter()
        .enumerate()
        .map(|(index, element)| function(index, element))
        .collect()
}

/// Turns a sequence of `Option`s into an `Option` of a `Vec`.
pub fn sequence_array<I, A>(iterable: I) -> Option<Vec<A>>
where
    I: IntoIterator<Item = Option<A>>,
{
    iterable.into_iter().collect()
}

/// Keeps the `Some` values, dropping every `None`.
///
/// # Examples
///
/// ```rust
/// use fpkit::option;
///
/// assert_eq!(option::compact_array([Some(1), None, Some(3)]), vec![1, 3]);
/// ```
pub fn compact_array<I, A>(iterable: I) -> Vec<A>
where
    I: IntoIterator<Item = Option<A>>,
{
    iterable.into_iter().flatten().collect()
}

/// Runs `step` in a loop until it lands or gives up.
///
/// `step` returns `Some(Left(next))` to continue with `next`,
/// `Some(Right(done))` to finish, or `None` to stop. The loop runs in
/// constant stack space.
///
/// # Examples
///
/// ```rust
/// use fpkit::either::Either;
/// use fpkit::option;
///
/// // Collatz steps until 1, giving up after 1000 steps.
/// let steps = option::tail_rec((27_u64, 0_u32), |(n, count)| match (n, count) {
///     (1, count) => Some(Either::Right(count)),
///     (_, 1000) => None,
///     (n, count) if n % 2 == 0 => Some(Either::Left((n / 2, count + 1))),
///     (n, count) => Some(Either::Left((3 * n + 1, count + 1))),
/// });
/// assert_eq!(steps, Some(111));
/// ```
pub fn tail_rec<A, B, F>(initial: A, mut step: F) -> Option<B>
where
    F: FnMut(A) -> Option<Either<A, B>>,
{
    let mut current = initial;

    loop {
        match step(current)? {
            Either::Left(next) => current = next,
            Either::Right(done) => return Some(done),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn traverse_stops_at_first_none() {
        let mut visited = 0;
        let result = traverse_array([2, 0, 5], |n: i32| {
            visited += 1;
            10_i32.checked_div(n)
        });
        assert_eq!(result, None);
        assert_eq!(visited, 2);
    }

    #[rstest]
    fn traverse_with_index() {
        let result = traverse_array_with_index(["a", "b"], |index, text| (index < 2).then(|| text.repeat(index + 1)));
        assert_eq!(result, Some(vec!["a".to_string(), "bb".to_string()]));
    }

    #[rstest]
    #[case(vec![Some(1), Some(2)], Some(vec![1, 2]))]
    #[case(vec![Some(1), None], None)]
    #[case(vec![], Some(vec![]))]
    fn sequence_cases(#[case] input: Vec<Option<i32>>, #[case] expected: Option<Vec<i32>>) {
        assert_eq!(sequence_array(input), expected);
    }

    #[rstest]
    fn tail_rec_none_stops() {
        let result: Option<()> = tail_rec(0, |n| if n < 5 { Some(Either::Left(n + 1)) } else { None });
        assert_eq!(result, None);
    }

    #[rstest]
    fn tail_rec_long_countdown() {
        let result = tail_rec(50_000_u32, |n| {
            Some(if n == 0 { Either::Right("done") } else { Either::Left(n - 1) })
        });
        assert_eq!(result, Some("done"));
    }
}
