//! Newtype wrappers selecting a particular `Semigroup`/`Monoid` instance.
//!
//! The same underlying type can be combined in more than one lawful way:
//! integers add or multiply, options keep the first or the last `Some`. Each
//! wrapper picks one.
//!
//! # Available Wrappers
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`]: maximum (identity: the type's minimum, see [`Bounded`])
//! - [`Min`]: minimum (identity: the type's maximum)
//! - [`First`]: leftmost `Some` (identity: `First(None)`)
//! - [`Last`]: rightmost `Some` (identity: `Last(None)`)
//! - [`Dual`]: the wrapped semigroup with its arguments flipped
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::{First, Last, Monoid, Semigroup};
//!
//! let readings = vec![First(None), First(Some(3)), First(Some(7))];
//! assert_eq!(First::combine_all(readings), First(Some(3)));
//!
//! let readings = vec![Last(Some(3)), Last(Some(7)), Last(None)];
//! assert_eq!(Last::combine_all(readings), Last(Some(7)));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! wrapper_accessors {
    ($name:ident, $inner:ty) => {
        impl<A> $name<A> {
            /// Wraps `value`.
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> $inner {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &$inner {
                &self.0
            }
        }

        impl<A> From<$inner> for $name<A> {
            fn from(value: $inner) -> Self {
                Self::new(value)
            }
        }
    };
}

/// The additive semigroup/monoid.
///
/// ```rust
/// use fpkit::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Sum<A>(pub A);

/// The multiplicative semigroup/monoid.
///
/// `Default` is not derived: the identity is 1, not 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Product<A>(pub A);

/// Keeps the greater value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Max<A>(pub A);

/// Keeps the smaller value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Min<A>(pub A);

/// Keeps the leftmost `Some`; `First(None)` is the identity.
///
/// ```rust
/// use fpkit::typeclass::{First, Semigroup};
///
/// assert_eq!(First(Some(1)).combine(First(Some(2))), First(Some(1)));
/// assert_eq!(First(None).combine(First(Some(2))), First(Some(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct First<A>(pub Option<A>);

/// Keeps the rightmost `Some`; `Last(None)` is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Last<A>(pub Option<A>);

/// Flips the order of the wrapped semigroup: `Dual(a).combine(Dual(b)) == Dual(b.combine(a))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Dual<A>(pub A);

wrapper_accessors!(Sum, A);
wrapper_accessors!(Product, A);
wrapper_accessors!(Max, A);
wrapper_accessors!(Min, A);
wrapper_accessors!(Dual, A);
wrapper_accessors!(First, Option<A>);
wrapper_accessors!(Last, Option<A>);

/// Types with a least and a greatest value.
///
/// Supplies the identity elements of `Max` and `Min`.
///
/// ```rust
/// use fpkit::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert_eq!(Score::MAX_VALUE.0, 100);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_primitive {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl Bounded for $primitive {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

bounded_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl Bounded for () {
    const MIN_VALUE: Self = ();
    const MAX_VALUE: Self = ();
}
