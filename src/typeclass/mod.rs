//! Type class traits over `Option`, `Either` and `Vec`.
//!
//! - [`Functor`] / [`FunctorMut`]: mapping over the contained value(s)
//! - [`Applicative`]: combining independent computations (fail-fast)
//! - [`Monad`]: sequencing dependent computations
//! - [`ChainRec`]: monadic tail recursion without stack growth
//! - [`Alt`] / [`Alternative`]: first success wins
//! - [`Foldable`]: reducing to a summary value
//! - [`Traversable`]: turning a structure of effects inside out
//! - [`Filterable`] / [`Compactable`]: dropping and splitting values
//! - [`Bifunctor`]: mapping both sides of a two-parameter type
//! - [`Semigroup`] / [`Monoid`]: associative combination and its identity
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types, so the traits are written against
//! [`TypeConstructor`], a Generic Associated Type that re-applies a
//! constructor such as `Either<E, _>` to a new argument.
//!
//! ## Wrappers
//!
//! [`Sum`], [`Product`], [`Max`], [`Min`], [`First`], [`Last`] and [`Dual`]
//! select one of several lawful `Semigroup`/`Monoid` instances for the same
//! underlying type. [`Bounded`] supplies the identities of `Max` and `Min`.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::{Applicative, Monoid, Sum, Traversable};
//!
//! let a: Either<String, i32> = Either::Right(1);
//! let b: Either<String, i32> = Either::Right(2);
//! assert_eq!(Applicative::map2(a, b, |x, y| x + y), Either::Right(3));
//!
//! let parsed: Option<Vec<i32>> = vec!["1", "2"].traverse_option(|s| s.parse().ok());
//! assert_eq!(parsed, Some(vec![1, 2]));
//!
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! ```

mod alternative;
mod applicative;
mod bifunctor;
mod chain_rec;
mod filterable;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use alternative::{Alt, Alternative};
pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use chain_rec::ChainRec;
pub use filterable::{Compactable, Filterable, IntoEither, IntoOption};
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{Bounded, Dual, First, Last, Max, Min, Product, Sum};
