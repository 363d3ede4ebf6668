//! Error-accumulating applicative operations.
//!
//! The fail-fast operations (`ap`, `map2`, [`traverse_array`](super::traverse_array))
//! keep only the first `Left`. The `_v` variants below evaluate every branch
//! and combine all of the left values, either with the error type's
//! [`Semigroup`] or with a caller-supplied closure:
//!
//! | first      | second     | result                   |
//! |------------|------------|--------------------------|
//! | `Right(f)` | `Right(a)` | `Right(f(a))`            |
//! | `Left(e1)` | `Right(_)` | `Left(e1)`               |
//! | `Right(_)` | `Left(e2)` | `Left(e2)`               |
//! | `Left(e1)` | `Left(e2)` | `Left(combine(e1, e2))`  |
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::{self, Either};
//!
//! fn non_empty(field: &str, value: &str) -> Either<Vec<String>, String> {
//!     if value.is_empty() {
//!         Either::Left(vec![format!("{field} is empty")])
//!     } else {
//!         Either::Right(value.to_string())
//!     }
//! }
//!
//! let checked = non_empty("name", "").map2_v(non_empty("email", ""), |name, email| (name, email));
//! assert_eq!(
//!     checked,
//!     Either::Left(vec!["name is empty".to_string(), "email is empty".to_string()])
//! );
//! ```

use super::Either;
use crate::typeclass::Semigroup;

impl<E, F> Either<E, F> {
    /// Applies the function in `self` to `argument`, accumulating both lefts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let function: Either<String, fn(i32) -> i32> = Either::Left("a".to_string());
    /// assert_eq!(function.ap_v(Either::Left("b".to_string())), Either::Left("ab".to_string()));
    /// ```
    #[inline]
    pub fn ap_v<A, B>(self, argument: Either<E, A>) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
        E: Semigroup,
    {
        self.ap_v_with(argument, Semigroup::combine)
    }

    /// Like [`ap_v`](Self::ap_v), combining two lefts with `combine`.
    #[inline]
    pub fn ap_v_with<A, B, C>(self, argument: Either<E, A>, combine: C) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
        C: FnOnce(E, E) -> E,
    {
        match (self, argument) {
            (Self::Right(function), Either::Right(value)) => Either::Right(function(value)),
            (Self::Left(first), Either::Left(second)) => Either::Left(combine(first, second)),
            (Self::Left(error), Either::Right(_)) | (Self::Right(_), Either::Left(error)) => {
                Either::Left(error)
            }
        }
    }

    /// Combines two right values with `function`, accumulating both lefts.
    #[inline]
    pub fn map2_v<T, U, G>(self, other: Either<E, T>, function: G) -> Either<E, U>
    where
        G: FnOnce(F, T) -> U,
        E: Semigroup,
    {
        self.map2_v_with(other, Semigroup::combine, function)
    }

    /// Like [`map2_v`](Self::map2_v), combining two lefts with `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let first: Either<String, i32> = Either::Left("a".to_string());
    /// let second: Either<String, i32> = Either::Left("b".to_string());
    /// let joined = first.map2_v_with(second, |x, y| format!("{x}; {y}"), |a, b| a + b);
    /// assert_eq!(joined, Either::Left("a; b".to_string()));
    /// ```
    #[inline]
    pub fn map2_v_with<T, U, C, G>(self, other: Either<E, T>, combine: C, function: G) -> Either<E, U>
    where
        C: FnOnce(E, E) -> E,
        G: FnOnce(F, T) -> U,
    {
        self.map(|first| move |second| function(first, second))
            .ap_v_with(other, combine)
    }
}

/// Applies `function` to every element, accumulating every left value.
///
/// Unlike [`traverse_array`](super::traverse_array), every element is visited.
///
/// # Examples
///
/// ```rust
/// use fpkit::either::{self, Either};
///
/// let positive = |n: i32| if n > 0 { Either::Right(n) } else { Either::Left(vec![n]) };
/// assert_eq!(either::traverse_array_v([1, -2, 3, -4], positive), Either::Left(vec![-2, -4]));
/// assert_eq!(either::traverse_array_v([1, 2], positive), Either::Right(vec![1, 2]));
/// ```
pub fn traverse_array_v<I, E, A, B, F>(iterable: I, function: F) -> Either<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Either<E, B>,
    E: Semigroup,
{
    iterable
        .into_iter()
        .map(function)
        .fold(Either::Right(Vec::new()), |accumulator, element| {
            accumulator.map2_v(element, |mut values, value| {
                values.push(value);
                values
            })
        })
}

/// Turns a sequence of `Either`s into an `Either` of a `Vec`, accumulating every left value.
pub fn sequence_array_v<I, E, A>(iterable: I) -> Either<E, Vec<A>>
where
    I: IntoIterator<Item = Either<E, A>>,
    E: Semigroup,
{
    traverse_array_v(iterable, std::convert::identity)
}
