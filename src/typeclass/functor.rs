//! Functor type class - mapping over the contained value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::Functor;
//!
//! let parsed: Either<String, i32> = Either::Right(5);
//! assert_eq!(parsed.fmap(|n| n.to_string()), Either::Right("5".to_string()));
//!
//! let failed: Either<String, i32> = Either::Left("boom".to_string());
//! assert_eq!(failed.fmap(|n| n * 2), Either::Left("boom".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::either::Either;

/// A type class for types that can have a function mapped over their contents.
///
/// Mapping never changes the case of a sum type: `None` stays `None`, `Left`
/// stays `Left`, and the function is not called for them.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(None::<i32>.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// An extension of `Functor` for containers with multiple elements.
///
/// `Functor::fmap` takes a `FnOnce`, which is enough for the sum types but not
/// for `Vec`, where the function has to run once per element.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::FunctorMut;
///
/// let doubled: Vec<i32> = vec![1, 2, 3].fmap_mut(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies a mutable function to each element.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<A> FunctorMut for Option<A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

// =============================================================================
// Either<E, A> Implementation
// =============================================================================

impl<E, A> Functor for Either<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        Self::map(self, function)
    }
}

impl<E, A> FunctorMut for Either<E, A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnMut(A) -> B,
    {
        Self::map(self, function)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> FunctorMut for Vec<A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(5), Some(10))]
    #[case(None, None)]
    fn option_fmap_doubles_present_values(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn either_fmap_transforms_right() {
        let value: Either<String, i32> = Either::Right(21);
        assert_eq!(value.fmap(|n| n * 2), Either::Right(42));
    }

    #[rstest]
    fn either_fmap_skips_function_on_left() {
        let calls = Cell::new(0);
        let value: Either<String, i32> = Either::Left("boom".to_string());
        let result = value.fmap(|n| {
            calls.set(calls.get() + 1);
            n * 2
        });
        assert_eq!(result, Either::Left("boom".to_string()));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn either_void_keeps_case() {
        let right: Either<String, i32> = Either::Right(1);
        let left: Either<String, i32> = Either::Left("e".to_string());
        assert_eq!(right.void(), Either::Right(()));
        assert_eq!(left.void(), Either::Left("e".to_string()));
    }

    #[rstest]
    fn vec_fmap_mut_visits_every_element() {
        let mut seen = Vec::new();
        let result: Vec<String> = vec![1, 2, 3].fmap_mut(|n| {
            seen.push(n);
            n.to_string()
        });
        assert_eq!(result, vec!["1", "2", "3"]);
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
