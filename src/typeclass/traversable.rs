//! Traversable type class - effectful traversal with fail-fast semantics.
//!
//! Traversing applies an `Option`- or `Either`-returning function to every
//! element and turns the structure inside out. The first `None`/`Left`
//! stops the traversal and no further elements are visited.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.traverse_option(Some) == Some(fa)
//! ```
//!
//! ## Naturality
//!
//! ```text
//! transform(fa.traverse(f)) == fa.traverse(transform . f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::Traversable;
//!
//! fn positive(n: i32) -> Either<String, i32> {
//!     if n > 0 { Either::Right(n) } else { Either::Left(format!("{n} is not positive")) }
//! }
//!
//! assert_eq!(vec![1, 2, 3].traverse_either(positive), Either::Right(vec![1, 2, 3]));
//! assert_eq!(
//!     vec![1, -2, -3].traverse_either(positive),
//!     Either::Left("-2 is not positive".to_string())
//! );
//! ```

use super::foldable::Foldable;
use super::higher::TypeConstructor;
use crate::either::Either;

/// A type class for structures that can be traversed with an effect.
pub trait Traversable: Foldable {
    /// Applies an `Option`-returning function to each element and collects the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Traversable;
    ///
    /// let parsed: Option<Vec<i32>> = vec!["1", "2", "3"].traverse_option(|s| s.parse().ok());
    /// assert_eq!(parsed, Some(vec![1, 2, 3]));
    ///
    /// let failed: Option<Vec<i32>> = vec!["1", "x"].traverse_option(|s| s.parse().ok());
    /// assert_eq!(failed, None);
    /// ```
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies an `Either`-returning function to each element and collects the results.
    ///
    /// # Returns
    ///
    /// `Right` with all results, or the first `Left` produced
    fn traverse_either<B, E, F>(self, function: F) -> Either<E, Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Either<E, B>;

    /// Turns a structure of `Option`s inside out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Traversable;
    ///
    /// assert_eq!(vec![Some(1), Some(2)].sequence_option(), Some(vec![1, 2]));
    /// assert_eq!(vec![Some(1), None].sequence_option(), None);
    /// ```
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of `Either`s inside out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    /// use fpkit::typeclass::Traversable;
    ///
    /// let values: Vec<Either<&str, i32>> = vec![Either::Right(1), Either::Left("bad"), Either::Left("worse")];
    /// assert_eq!(values.sequence_either(), Either::Left("bad"));
    /// ```
    fn sequence_either<E>(
        self,
    ) -> Either<E, Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Either<E, <Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_either(Into::into)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Some(None),
        }
    }

    fn traverse_either<B, E, F>(self, mut function: F) -> Either<E, Option<B>>
    where
        F: FnMut(A) -> Either<E, B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Either::Right(None),
        }
    }
}

// =============================================================================
// Either<E, A> Implementation
// =============================================================================

impl<L, A> Traversable for Either<L, A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Either<L, B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Self::Right(element) => function(element).map(Either::Right),
            Self::Left(error) => Some(Either::Left(error)),
        }
    }

    fn traverse_either<B, E, F>(self, mut function: F) -> Either<E, Either<L, B>>
    where
        F: FnMut(A) -> Either<E, B>,
    {
        match self {
            Self::Right(element) => function(element).map(Either::Right),
            Self::Left(error) => Either::Right(Either::Left(error)),
        }
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Traversable for Vec<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Vec<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        let mut result = Vec::with_capacity(self.len());
        for element in self {
            match function(element) {
                Some(value) => result.push(value),
                None => return None,
            }
        }
        Some(result)
    }

    fn traverse_either<B, E, F>(self, mut function: F) -> Either<E, Vec<B>>
    where
        F: FnMut(A) -> Either<E, B>,
    {
        let mut result = Vec::with_capacity(self.len());
        for element in self {
            match function(element) {
                Either::Right(value) => result.push(value),
                Either::Left(error) => return Either::Left(error),
            }
        }
        Either::Right(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn parse(text: &str) -> Either<String, i32> {
        text.parse()
            .map_or_else(|_| Either::Left(format!("bad input: {text}")), Either::Right)
    }

    #[rstest]
    fn option_traverse_either_none_is_right_none() {
        assert_eq!(None::<&str>.traverse_either(parse), Either::Right(None));
    }

    #[rstest]
    fn option_traverse_either_some() {
        assert_eq!(Some("4").traverse_either(parse), Either::Right(Some(4)));
        assert_eq!(
            Some("x").traverse_either(parse),
            Either::Left("bad input: x".to_string())
        );
    }

    #[rstest]
    fn either_traverse_option_keeps_left() {
        let left: Either<&str, i32> = Either::Left("e");
        assert_eq!(left.traverse_option(|n| Some(n + 1)), Some(Either::Left("e")));
    }

    #[rstest]
    fn vec_traverse_either_stops_at_first_left() {
        let visited = Cell::new(0);
        let result = vec!["1", "x", "y", "4"].traverse_either(|text| {
            visited.set(visited.get() + 1);
            parse(text)
        });
        assert_eq!(result, Either::Left("bad input: x".to_string()));
        assert_eq!(visited.get(), 2);
    }

    #[rstest]
    fn vec_sequence_either_all_right() {
        let values: Vec<Either<String, i32>> = vec![Either::Right(1), Either::Right(2)];
        let result: Either<String, Vec<i32>> = values.sequence_either();
        assert_eq!(result, Either::Right(vec![1, 2]));
    }

    #[rstest]
    fn vec_traverse_empty() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(empty.traverse_either(parse), Either::Right(Vec::new()));
    }
}
