//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends `Applicative` with `flat_map`: the value produced by one
//! step decides which computation runs next. For `Option` and `Either` a
//! `None`/`Left` ends the chain and every later function is skipped.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::Monad;
//!
//! fn positive(n: i32) -> Either<String, i32> {
//!     if n > 0 { Either::Right(n) } else { Either::Left(format!("{n} is not positive")) }
//! }
//!
//! assert_eq!(Either::Right(5).flat_map(positive), Either::Right(5));
//! assert_eq!(
//!     Either::Right(-1).flat_map(positive).flat_map(|n| Either::Right(n * 2)),
//!     Either::Left("-1 is not positive".to_string())
//! );
//! ```

use super::applicative::Applicative;
use crate::either::Either;

/// A type class for types that support sequencing of computations.
///
/// See the module documentation for the laws.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Returns
    ///
    /// The monad returned by `function`, or the original failure
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    /// assert_eq!(Some(5).flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// A failure in `self` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Either<E, A> Implementation
// =============================================================================

impl<E, A> Monad for Either<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        Self::and_then(self, function)
    }
}
