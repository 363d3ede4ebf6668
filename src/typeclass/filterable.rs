//! Filterable and Compactable type classes - dropping and splitting values.
//!
//! [`Compactable`] removes the `None`s from a structure of `Option`s and
//! splits a structure of `Either`s in two. [`Filterable`] generalises that
//! to predicates and `Option`/`Either`-returning functions.
//!
//! `Either<E, A>` is only filterable when `E` is a [`Monoid`]: a rejected
//! `Right` has to become some `Left`, and `E::empty()` is the one value
//! available for it.
//!
//! `partition` follows `Iterator::partition`: the first half holds the values
//! that satisfy the predicate. `partition_map` and `separate` put the `Left`
//! results first.
//!
//! # Laws
//!
//! ```text
//! fa.filter_map(Some) == fa
//! fa.filter(|_| true) == fa
//! fa.filter_map(f).filter_map(g) == fa.filter_map(|a| f(a).and_then(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::{Compactable, Filterable};
//!
//! let numbers = vec!["1", "two", "3"];
//! assert_eq!(numbers.filter_map(|s| s.parse::<i32>().ok()), vec![1, 3]);
//!
//! let (even, odd) = vec![1, 2, 3, 4].partition(|n| n % 2 == 0);
//! assert_eq!(even, vec![2, 4]);
//! assert_eq!(odd, vec![1, 3]);
//!
//! assert_eq!(vec![Some(1), None, Some(3)].compact(), vec![1, 3]);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::either::Either;

/// Sum types that can be viewed as an [`Either`].
///
/// Lets [`Compactable::separate`] accept both `Either` and `Result` elements.
pub trait IntoEither {
    /// The failure side.
    type Left;
    /// The success side.
    type Right;

    /// Converts into `Either`, `Err`/`Left` on the left.
    fn into_either(self) -> Either<Self::Left, Self::Right>;
}

impl<L, R> IntoEither for Either<L, R> {
    type Left = L;
    type Right = R;

    #[inline]
    fn into_either(self) -> Self {
        self
    }
}

impl<T, E> IntoEither for Result<T, E> {
    type Left = E;
    type Right = T;

    #[inline]
    fn into_either(self) -> Either<E, T> {
        Either::from(self)
    }
}

/// Values that can be viewed as an [`Option`].
///
/// Lets [`Compactable::compact`] name the payload of its `Option` elements.
pub trait IntoOption {
    /// The `Some` payload.
    type Value;

    /// Converts into `Option`.
    fn into_option(self) -> Option<Self::Value>;
}

impl<A> IntoOption for Option<A> {
    type Value = A;

    #[inline]
    fn into_option(self) -> Self {
        self
    }
}

/// A type class for structures whose `Option`/`Either` contents can be flattened.
pub trait Compactable: TypeConstructor {
    /// Drops every `None` and unwraps every `Some`.
    fn compact(self) -> Self::WithType<<Self::Inner as IntoOption>::Value>
    where
        Self: Sized,
        Self::Inner: IntoOption;

    /// Splits a structure of `Either`s into its lefts and its rights.
    #[allow(clippy::type_complexity)]
    fn separate(
        self,
    ) -> (
        Self::WithType<<Self::Inner as IntoEither>::Left>,
        Self::WithType<<Self::Inner as IntoEither>::Right>,
    )
    where
        Self: Sized,
        Self::Inner: IntoEither;
}

/// A type class for structures that can drop elements.
pub trait Filterable: TypeConstructor {
    /// Maps each element with `function`, keeping only the `Some` results.
    ///
    /// # Arguments
    ///
    /// * `function` - Returns `Some(b)` to keep a transformed value, `None` to drop it
    fn filter_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Keeps the elements that satisfy `predicate`.
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized;

    /// Splits the elements by `predicate`: `(satisfying, not_satisfying)`.
    fn partition<P>(self, predicate: P) -> (Self, Self)
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized;

    /// Maps each element to an `Either` and splits the results: `(lefts, rights)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    /// use fpkit::typeclass::Filterable;
    ///
    /// let (errors, numbers) = vec!["1", "x", "3"].partition_map(|s| match s.parse::<i32>() {
    ///     Ok(n) => Either::Right(n),
    ///     Err(_) => Either::Left(s),
    /// });
    /// assert_eq!(errors, vec!["x"]);
    /// assert_eq!(numbers, vec![1, 3]);
    /// ```
    fn partition_map<B, C, F>(self, function: F) -> (Self::WithType<B>, Self::WithType<C>)
    where
        F: FnMut(Self::Inner) -> Either<B, C>;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Compactable for Option<A> {
    #[inline]
    fn compact(self) -> Option<A::Value>
    where
        A: IntoOption,
    {
        self.and_then(IntoOption::into_option)
    }

    fn separate(self) -> (Option<A::Left>, Option<A::Right>)
    where
        A: IntoEither,
    {
        match self.map(IntoEither::into_either) {
            Some(Either::Left(left)) => (Some(left), None),
            Some(Either::Right(right)) => (None, Some(right)),
            None => (None, None),
        }
    }
}

impl<A> Filterable for Option<A> {
    #[inline]
    fn filter_map<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(|value| function(value))
    }

    #[inline]
    fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        Self::filter(self, |value| predicate(value))
    }

    fn partition<P>(self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&A) -> bool,
    {
        match self {
            Some(value) if predicate(&value) => (Some(value), None),
            Some(value) => (None, Some(value)),
            None => (None, None),
        }
    }

    fn partition_map<B, C, F>(self, mut function: F) -> (Option<B>, Option<C>)
    where
        F: FnMut(A) -> Either<B, C>,
    {
        match self.map(|value| function(value)) {
            Some(Either::Left(left)) => (Some(left), None),
            Some(Either::Right(right)) => (None, Some(right)),
            None => (None, None),
        }
    }
}

// =============================================================================
// Either<E, A> Implementation
// =============================================================================

impl<E: Monoid + Clone, A> Compactable for Either<E, A> {
    fn compact(self) -> Either<E, A::Value>
    where
        A: IntoOption,
    {
        match self {
            Self::Right(inner) => inner
                .into_option()
                .map_or_else(|| Either::Left(E::empty()), Either::Right),
            Self::Left(error) => Either::Left(error),
        }
    }

    fn separate(self) -> (Either<E, A::Left>, Either<E, A::Right>)
    where
        A: IntoEither,
    {
        match self.map(IntoEither::into_either) {
            Either::Right(Either::Left(left)) => (Either::Right(left), Either::Left(E::empty())),
            Either::Right(Either::Right(right)) => (Either::Left(E::empty()), Either::Right(right)),
            Either::Left(error) => (Either::Left(error.clone()), Either::Left(error)),
        }
    }
}

impl<E: Monoid + Clone, A> Filterable for Either<E, A> {
    fn filter_map<B, F>(self, mut function: F) -> Either<E, B>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Self::Right(value) => function(value).map_or_else(|| Either::Left(E::empty()), Either::Right),
            Self::Left(error) => Either::Left(error),
        }
    }

    fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        match self {
            Self::Right(value) if predicate(&value) => Self::Right(value),
            Self::Right(_) => Self::Left(E::empty()),
            Self::Left(error) => Self::Left(error),
        }
    }

    fn partition<P>(self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&A) -> bool,
    {
        match self {
            Self::Right(value) if predicate(&value) => (Self::Right(value), Self::Left(E::empty())),
            Self::Right(value) => (Self::Left(E::empty()), Self::Right(value)),
            Self::Left(error) => (Self::Left(error.clone()), Self::Left(error)),
        }
    }

    fn partition_map<B, C, F>(self, mut function: F) -> (Either<E, B>, Either<E, C>)
    where
        F: FnMut(A) -> Either<B, C>,
    {
        match self {
            Self::Right(value) => match function(value) {
                Either::Left(left) => (Either::Right(left), Either::Left(E::empty())),
                Either::Right(right) => (Either::Left(E::empty()), Either::Right(right)),
            },
            Self::Left(error) => (Either::Left(error.clone()), Either::Left(error)),
        }
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Compactable for Vec<A> {
    fn compact(self) -> Vec<A::Value>
    where
        A: IntoOption,
    {
        self.into_iter().filter_map(IntoOption::into_option).collect()
    }

    fn separate(self) -> (Vec<A::Left>, Vec<A::Right>)
    where
        A: IntoEither,
    {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for element in self {
            match element.into_either() {
                Either::Left(left) => lefts.push(left),
                Either::Right(right) => rights.push(right),
            }
        }
        (lefts, rights)
    }
}

impl<A> Filterable for Vec<A> {
    fn filter_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.into_iter().filter_map(function).collect()
    }

    fn filter<P>(mut self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        self.retain(|element| predicate(element));
        self
    }

    fn partition<P>(self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&A) -> bool,
    {
        self.into_iter().partition(|element| predicate(element))
    }

    fn partition_map<B, C, F>(self, function: F) -> (Vec<B>, Vec<C>)
    where
        F: FnMut(A) -> Either<B, C>,
    {
        self.into_iter().map(function).collect::<Vec<Either<B, C>>>().separate()
    }
}
