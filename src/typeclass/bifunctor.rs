//! Bifunctor type class - mapping over both sides.
//!
//! For `Either<E, A>`, `first` maps the error and `second` maps the success
//! value, so `second` agrees with `Functor::fmap`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::Bifunctor;
//!
//! let failed: Either<i32, String> = Either::Left(404);
//! let described = Bifunctor::bimap(failed, |code| format!("HTTP {code}"), |body: String| body.len());
//! assert_eq!(described, Either::Left("HTTP 404".to_string()));
//! ```

use crate::either::Either;

/// A type with two parameters that can both be mapped.
pub trait Bifunctor<A, B> {
    /// The same shape over the mapped parameters.
    type Target<C, D>;

    /// Applies `first_function` to the first parameter and `second_function` to the second.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Bifunctor;
    ///
    /// assert_eq!((1, "x").first(|n| n + 1), (2, "x"));
    /// ```
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps the second parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Either<C, R>
    where
        F: FnOnce(L) -> C,
    {
        self.map_left(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Either<L, D>
    where
        G: FnOnce(R) -> D,
    {
        self.map(function)
    }
}

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn either_first_maps_left_only() {
        let left: Either<i32, &str> = Either::Left(1);
        let right: Either<i32, &str> = Either::Right("r");
        assert_eq!(left.first(|n| n * 10), Either::Left(10));
        assert_eq!(right.first(|n| n * 10), Either::Right("r"));
    }

    #[rstest]
    fn either_second_matches_map() {
        let right: Either<String, i32> = Either::Right(2);
        assert_eq!(right.clone().second(|n| n + 1), right.map(|n| n + 1));
    }

    #[rstest]
    fn tuple_second_and_consistency() {
        let pair = (3, "abc");
        assert_eq!(pair.second(str::len), (3, 3));
        assert_eq!(pair.bimap(|n| n * 2, str::len), pair.first(|n| n * 2).second(str::len));
    }
}
