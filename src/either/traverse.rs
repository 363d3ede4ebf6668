//! Fail-fast traversals over collections of `Either`.
//!
//! Collecting an iterator of `Either<E, A>` into `Either<E, V>` stops at the
//! first `Left`, like collecting into `Result`:
//!
//! ```rust
//! use fpkit::either::Either;
//!
//! let values = vec![Either::Right(1), Either::Left("bad"), Either::Right(3)];
//! let collected: Either<&str, Vec<i32>> = values.into_iter().collect();
//! assert_eq!(collected, Either::Left("bad"));
//! ```

use super::Either;

impl<E, A, V> FromIterator<Either<E, A>> for Either<E, V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Either<E, A>>>(iterable: I) -> Self {
        iterable
            .into_iter()
            .map(Result::from)
            .collect::<Result<V, E>>()
            .into()
    }
}

/// Applies `function` to every element, stopping at the first `Left`.
///
/// Elements after the first `Left` are not visited.
///
/// # Examples
///
/// ```rust
/// use fpkit::either::{self, Either};
///
/// let parse = |text: &str| either::try_catch(text.parse::<i32>(), |_| format!("bad: {text}"));
/// assert_eq!(either::traverse_array(["1", "2"], parse), Either::Right(vec![1, 2]));
/// assert_eq!(either::traverse_array(["1", "x", "y"], parse), Either::Left("bad: x".to_string()));
/// ```
pub fn traverse_array<I, E, A, B, F>(iterable: I, function: F) -> Either<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Either<E, B>,
{
    iterable.into_iter().map(function).collect()
}

/// Like [`traverse_array`], passing each element's index to `function`.
pub fn traverse_array_with_index<I, E, A, B, F>(iterable: I, mut function: F) -> Either<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(usize, A) -> Either<E, B>,
{
    iterable
        .into_iter()
        .enumerate()
        .map(|(index, element)| function(index, element))
        .collect()
}

/// Turns a sequence of `Either`s into an `Either` of a `Vec`; the first `Left` wins.
pub fn sequence_array<I, E, A>(iterable: I) -> Either<E, Vec<A>>
where
    I: IntoIterator<Item = Either<E, A>>,
{
    iterable.into_iter().collect()
}

/// Collects every left value, in order.
pub fn lefts<I, E, A>(iterable: I) -> Vec<E>
where
    I: IntoIterator<Item = Either<E, A>>,
{
    iterable.into_iter().filter_map(Either::left).collect()
}

/// Collects every right value, in order.
pub fn rights<I, E, A>(iterable: I) -> Vec<A>
where
    I: IntoIterator<Item = Either<E, A>>,
{
    iterable.into_iter().filter_map(Either::right).collect()
}

/// Splits a sequence into its left values and its right values.
///
/// # Examples
///
/// ```rust
/// use fpkit::either::{self, Either};
///
/// let mixed = vec![Either::Left("a"), Either::Right(1), Either::Left("b")];
/// assert_eq!(either::separate(mixed), (vec!["a", "b"], vec![1]));
/// ```
pub fn separate<I, E, A>(iterable: I) -> (Vec<E>, Vec<A>)
where
    I: IntoIterator<Item = Either<E, A>>,
{
    let mut left_values = Vec::new();
    let mut right_values = Vec::new();
    for element in iterable {
        match element {
            Either::Left(value) => left_values.push(value),
            Either::Right(value) => right_values.push(value),
        }
    }
    (left_values, right_values)
}

/// Returns the first `Right`, otherwise the last `Left`.
///
/// An empty sequence yields `None`. Elements after the first `Right` are not
/// pulled from the iterator.
///
/// # Examples
///
/// ```rust
/// use fpkit::either::{self, Either};
///
/// let sources: Vec<Either<&str, u16>> = vec![Either::Left("env"), Either::Right(80), Either::Right(443)];
/// assert_eq!(either::alt_all(sources), Some(Either::Right(80)));
///
/// let failures: Vec<Either<&str, u16>> = vec![Either::Left("env"), Either::Left("file")];
/// assert_eq!(either::alt_all(failures), Some(Either::Left("file")));
/// ```
pub fn alt_all<I, E, A>(iterable: I) -> Option<Either<E, A>>
where
    I: IntoIterator<Item = Either<E, A>>,
{
    let mut last = None;
    for element in iterable {
        if element.is_right() {
            return Some(element);
        }
        last = Some(element);
    }
    last
}
