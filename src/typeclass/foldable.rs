//! Foldable type class - reducing a structure to a summary value.
//!
//! `Option` and `Either` fold like containers of zero or one element: `None`
//! and `Left` contribute nothing and the initial accumulator comes back
//! untouched. `Vec` folds over all of its elements.
//!
//! # Laws
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().fold_left(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::{Foldable, Sum};
//!
//! let right: Either<String, i32> = Either::Right(10);
//! assert_eq!(right.fold_left(5, |accumulator, element| accumulator + element), 15);
//!
//! let left: Either<String, i32> = Either::Left("missing".to_string());
//! assert_eq!(left.fold_left(5, |accumulator, element| accumulator + element), 5);
//!
//! let total: Sum<i32> = vec![1, 2, 3].fold_map(Sum);
//! assert_eq!(total, Sum(6));
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::either::Either;

/// A type class for data structures that can be folded to a summary value.
///
/// Only `fold_left` and `fold_right` are required; the rest are derived from
/// `fold_left`.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - Takes the accumulator and an element, returns the next accumulator
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Foldable;
    ///
    /// let result = vec![1, 2, 3].fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines the results.
    ///
    /// An empty structure yields `M::empty()`.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects all elements into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Foldable;
    ///
    /// assert!(Some(5).exists(|n| *n > 3));
    /// assert!(!None::<i32>.exists(|n| *n > 3));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if every element satisfies `predicate`; vacuously true when empty.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Either<E, A> Implementation
// =============================================================================

impl<E, A> Foldable for Either<E, A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Right(element) => function(init, element),
            Self::Left(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Right(element) => function(element, init),
            Self::Left(_) => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_left()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_right())
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Foldable for Vec<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn option_fold_right_none_returns_init() {
        assert_eq!(None::<i32>.fold_right(7, |element, accumulator| element + accumulator), 7);
    }

    #[rstest]
    fn either_length_and_is_empty() {
        let right: Either<&str, i32> = Either::Right(1);
        let left: Either<&str, i32> = Either::Left("e");
        assert_eq!(Foldable::length(&right), 1);
        assert_eq!(Foldable::length(&left), 0);
        assert!(Foldable::is_empty(&left));
    }

    #[rstest]
    fn either_to_list() {
        let right: Either<&str, i32> = Either::Right(4);
        assert_eq!(right.to_list(), vec![4]);
        let left: Either<&str, i32> = Either::Left("e");
        assert_eq!(left.to_list(), Vec::<i32>::new());
    }

    #[rstest]
    fn either_fold_map_of_left_is_empty() {
        let left: Either<&str, i32> = Either::Left("e");
        let total: Sum<i32> = left.fold_map(Sum);
        assert_eq!(total, Sum(0));
    }

    #[rstest]
    #[case(vec![2, 4, 6], true)]
    #[case(vec![2, 3], false)]
    #[case(vec![], true)]
    fn vec_for_all_even(#[case] values: Vec<i32>, #[case] expected: bool) {
        assert_eq!(values.for_all(|element| element % 2 == 0), expected);
    }

    #[rstest]
    fn vec_find_first_match() {
        assert_eq!(vec![1, 2, 3, 4].find(|element| *element > 2), Some(3));
    }
}
