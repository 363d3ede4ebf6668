//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends `Functor` with `pure` (lift a value) and `map2`
//! (combine two contexts). For the sum types in this crate the combination is
//! fail-fast: the first `None`/`Left` wins. The error-accumulating variant for
//! `Either` lives on the type itself (`Either::ap_v`), because it needs a
//! `Semigroup` on the error type.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::Applicative;
//!
//! let x: Either<String, i32> = <Either<String, ()>>::pure(42);
//! assert_eq!(x, Either::Right(42));
//!
//! let a: Either<String, i32> = Either::Right(1);
//! let b: Either<String, i32> = Either::Right(2);
//! assert_eq!(a.map2(b, |x, y| x + y), Either::Right(3));
//! ```

use super::functor::Functor;
use crate::either::Either;

/// A type class for types that support lifting values and combining contexts.
///
/// See the module documentation for the laws.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side has failed, the result fails with the first failure.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both sides and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both sides and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

// =============================================================================
// Either<E, A> Implementation
// =============================================================================

impl<E, A> Applicative for Either<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Either<E, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<E, B>, function: F) -> Either<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Either<E, B>, third: Either<E, C>, function: F) -> Either<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Either::Right(a), Either::Right(b), Either::Right(c)) => {
                Either::Right(function(a, b, c))
            }
            (Either::Left(error), _, _)
            | (_, Either::Left(error), _)
            | (_, _, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<E, B>) -> Either<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        Self::ap(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_map2_requires_both() {
        assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
        assert_eq!(Some(1).map2(None::<i32>, |a, b| a + b), None);
    }

    #[rstest]
    fn option_map3_with_none() {
        assert_eq!(Some(1).map3(None::<i32>, Some(3), |a, b, c| a + b + c), None);
    }

    #[rstest]
    fn either_pure_is_right() {
        let value: Either<String, i32> = <Either<String, ()>>::pure(7);
        assert_eq!(value, Either::Right(7));
    }

    #[rstest]
    fn either_map3_returns_first_left() {
        let first: Either<&str, i32> = Either::Right(1);
        let second: Either<&str, i32> = Either::Left("second");
        let third: Either<&str, i32> = Either::Left("third");
        assert_eq!(
            Applicative::map3(first, second, third, |a, b, c| a + b + c),
            Either::Left("second")
        );
    }

    #[rstest]
    fn either_product_left_and_right() {
        let a: Either<String, i32> = Either::Right(1);
        let b: Either<String, &str> = Either::Right("b");
        assert_eq!(a.clone().product_left(b.clone()), Either::Right(1));
        assert_eq!(a.product_right(b), Either::Right("b"));
    }

    #[rstest]
    fn either_apply_uses_wrapped_function() {
        let function: Either<String, fn(i32) -> i32> = Either::Right(|x| x * 3);
        assert_eq!(function.apply(Either::Right(4)), Either::Right(12));
    }
}
