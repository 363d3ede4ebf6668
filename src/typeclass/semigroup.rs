//! Semigroup type class - types with an associative binary operation.
//!
//! Semigroups are what the error side of a validation needs: when two
//! independent checks both fail, `combine` merges their errors.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//!
//! // Either combines its Right values and keeps the first Left.
//! let total: Either<String, Sum<i32>> = Either::Right(Sum(1)).combine(Either::Right(Sum(2)));
//! assert_eq!(total, Either::Right(Sum(3)));
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Dual, First, Last, Max, Min, Product, Sum};
use crate::either::Either;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Semigroup;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// assert_eq!(a.combine_ref(&b), "Hello, World!");
    /// assert_eq!(a, "Hello, ");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces a non-empty iterator; `None` when it is empty.
    ///
    /// See [`Monoid::combine_all`](super::Monoid::combine_all) for a version
    /// that falls back to the identity element.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// `None` is neutral; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Either Implementation
// =============================================================================

/// The apply semigroup: `Right`s combine their contents and the first `Left` wins.
///
/// ```rust
/// use fpkit::either::Either;
/// use fpkit::typeclass::Semigroup;
///
/// let left: Either<&str, String> = Either::Left("a");
/// assert_eq!(left.combine(Either::Left("b")), Either::Left("a"));
/// ```
impl<E, A: Semigroup> Semigroup for Either<E, A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Right(left), Self::Right(right)) => Self::Right(left.combine(right)),
            (Self::Left(error), _) | (_, Self::Left(error)) => Self::Left(error),
        }
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

/// Keeps the leftmost `Some`.
impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        if self.0.is_some() { self } else { other }
    }
}

/// Keeps the rightmost `Some`.
impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        if other.0.is_some() { other } else { self }
    }
}

/// Combines in the opposite order.
impl<A: Semigroup> Semigroup for Dual<A> {
    fn combine(self, other: Self) -> Self {
        Self(other.0.combine(self.0))
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn either_left_left_keeps_first() {
        let left: Either<String, Sum<i32>> = Either::Left("a".to_string());
        let right: Either<String, Sum<i32>> = Either::Left("b".to_string());
        assert_eq!(left.combine(right), Either::Left("a".to_string()));
    }

    #[rstest]
    fn either_right_left_keeps_left() {
        let right: Either<String, Sum<i32>> = Either::Right(Sum(1));
        let left: Either<String, Sum<i32>> = Either::Left("b".to_string());
        assert_eq!(right.combine(left), Either::Left("b".to_string()));
    }

    #[rstest]
    fn either_right_right_combines() {
        let a: Either<String, Sum<i32>> = Either::Right(Sum(1));
        let b: Either<String, Sum<i32>> = Either::Right(Sum(2));
        assert_eq!(a.combine(b), Either::Right(Sum(3)));
    }

    #[rstest]
    #[case(First(Some(1)), First(Some(2)), First(Some(1)))]
    #[case(First(None), First(Some(2)), First(Some(2)))]
    #[case(First(None), First(None), First(None))]
    fn first_keeps_leftmost_some(
        #[case] left: First<i32>,
        #[case] right: First<i32>,
        #[case] expected: First<i32>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    #[case(Last(Some(1)), Last(Some(2)), Last(Some(2)))]
    #[case(Last(Some(1)), Last(None), Last(Some(1)))]
    fn last_keeps_rightmost_some(
        #[case] left: Last<i32>,
        #[case] right: Last<i32>,
        #[case] expected: Last<i32>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn dual_reverses_order() {
        let result = Dual(String::from("a")).combine(Dual(String::from("b")));
        assert_eq!(result, Dual(String::from("ba")));
    }

    #[rstest]
    fn option_none_is_neutral() {
        assert_eq!(Some(String::from("x")).combine(None), Some(String::from("x")));
    }

    #[rstest]
    fn combine_n_repeats() {
        assert_eq!(Sum(3).combine_n(4), Sum(12));
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn combine_n_zero_panics() {
        let _ = Sum(3).combine_n(0);
    }

    #[rstest]
    fn reduce_all_of_empty_is_none() {
        assert_eq!(Max::<i32>::reduce_all(Vec::new()), None);
        assert_eq!(Max::reduce_all(vec![Max(1), Max(5), Max(3)]), Some(Max(5)));
    }
}
