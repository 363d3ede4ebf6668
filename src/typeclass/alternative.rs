//! Alt and Alternative type classes - choosing the first success.
//!
//! [`Alt`] gives a functor an associative "try this, otherwise that" operation.
//! [`Alternative`] adds an identity for it (`empty`) on top of `Applicative`,
//! which only `Option` has here: `Either` has no way to conjure an error value
//! out of nothing, so it is `Alt` but not `Alternative`.
//!
//! # Laws
//!
//! ## Associativity Law (Alt)
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! ## Distributivity Law (Alt)
//!
//! ```text
//! x.alt(y).fmap(f) == x.fmap(f).alt(y.fmap(f))
//! ```
//!
//! ## Identity Laws (Alternative)
//!
//! ```text
//! empty.alt(x) == x
//! x.alt(empty) == x
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::Alt;
//!
//! let primary: Either<&str, i32> = Either::Left("primary down");
//! let backup: Either<&str, i32> = Either::Right(7);
//! assert_eq!(Alt::alt(primary, backup), Either::Right(7));
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use crate::either::Either;

/// A functor with an associative choice operation.
pub trait Alt: Functor {
    /// Returns `self` if it succeeded, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Alt;
    ///
    /// assert_eq!(None.alt(Some(42)), Some(42));
    /// assert_eq!(Some(1).alt(Some(2)), Some(1));
    /// ```
    #[must_use]
    fn alt(self, alternative: Self) -> Self;
}

/// An applicative with an identity element for [`Alt::alt`].
pub trait Alternative: Applicative + Alt {
    /// Returns the identity element for `alt`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Alternative;
    ///
    /// let empty: Option<i32> = <Option<()>>::empty();
    /// assert_eq!(empty, None);
    /// ```
    fn empty<B>() -> Self::WithType<B>;

    /// Succeeds with `()` when `condition` holds, otherwise returns `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Alternative, Functor};
    ///
    /// fn positive(n: i32) -> Option<i32> {
    ///     <Option<()>>::guard(n > 0).fmap(move |()| n)
    /// }
    ///
    /// assert_eq!(positive(5), Some(5));
    /// assert_eq!(positive(-3), None);
    /// ```
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition { Self::pure(()) } else { Self::empty() }
    }

    /// Turns failure into a successful `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Alternative;
    ///
    /// assert_eq!(Some(42).optional(), Some(Some(42)));
    /// assert_eq!(None::<i32>.optional(), Some(None));
    /// ```
    fn optional(self) -> Self::WithType<Option<Self::Inner>>
    where
        Self: Sized;

    /// Returns the first success among `alternatives`, or `empty` when none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Alternative;
    ///
    /// assert_eq!(Option::choice(vec![None, Some(1), Some(2)]), Some(1));
    /// assert_eq!(Option::<i32>::choice(vec![None, None]), None);
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Alt for Option<A> {
    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B> {
        None
    }

    #[inline]
    fn optional(self) -> Option<Self> {
        Some(self)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives.into_iter().find(Self::is_some).flatten()
    }
}

// =============================================================================
// Either<E, A> Implementation
// =============================================================================

impl<E, A> Alt for Either<E, A> {
    #[inline]
    fn alt(self, alternative: Self) -> Self {
        match self {
            Self::Right(_) => self,
            Self::Left(_) => alternative,
        }
    }
}
