//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//!
//! let identity: Either<String, Vec<i32>> = Either::empty();
//! assert_eq!(identity, Either::Right(Vec::new()));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Dual, First, Last, Max, Min, Product, Sum};
use crate::either::Either;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Monoid, Semigroup};
///
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element, starting from `empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// `Right(A::empty())`: a success carrying nothing.
impl<E, A: Monoid> Monoid for Either<E, A> {
    fn empty() -> Self {
        Self::Right(A::empty())
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_identity {
    ($one:literal => $($numeric:ty),*) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_identity!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_identity!(1.0 => f32, f64);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A: Monoid> Monoid for Dual<A> {
    fn empty() -> Self {
        Self(A::empty())
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn either_empty_is_right_identity() {
        let value: Either<String, String> = Either::Right("x".to_string());
        assert_eq!(value.clone().combine(Either::empty()), value);
        assert_eq!(Either::empty().combine(value.clone()), value);
    }

    #[rstest]
    fn either_empty_does_not_hide_left() {
        let value: Either<String, String> = Either::Left("boom".to_string());
        assert_eq!(Either::empty().combine(value.clone()), value);
    }

    #[rstest]
    fn max_and_min_identities() {
        assert_eq!(Max::<i32>::empty(), Max(i32::MIN));
        assert_eq!(Min::<u8>::empty(), Min(u8::MAX));
        assert_eq!(Max::combine_all(vec![Max(3), Max(9)]), Max(9));
    }

    #[rstest]
    fn product_identity_is_one() {
        assert_eq!(Product::<i64>::empty(), Product(1));
        assert_eq!(Product::combine_all(vec![Product(2.0), Product(4.0)]), Product(8.0_f64));
    }

    #[rstest]
    fn first_and_last_combine_all() {
        assert_eq!(First::combine_all(vec![First(None), First(Some(2)), First(Some(3))]), First(Some(2)));
        assert_eq!(Last::combine_all(vec![Last(Some(1)), Last(Some(2)), Last(None)]), Last(Some(2)));
        assert_eq!(First::<i32>::combine_all(Vec::new()), First(None));
    }

    #[rstest]
    fn tuple_empty() {
        let empty: (String, Vec<u8>) = Monoid::empty();
        assert!(empty.is_empty_value());
    }
}
