//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` or
//! `Either<E, _>` directly. [`TypeConstructor`] records the type a constructor
//! is currently applied to (`Inner`) and how to re-apply it to another type
//! (`WithType<B>`), which is all the type class traits need.
//!
//! # Example
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::TypeConstructor;
//!
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//!
//! assert_inner::<Option<i32>>();
//! assert_inner::<Either<String, i32>>();
//! ```

use crate::either::Either;

/// A type constructor applied to some type.
///
/// For `Option<A>`, `Inner` is `A` and `WithType<B>` is `Option<B>`.
/// For `Either<E, A>`, the constructor is right-biased: `Inner` is `A` and
/// `WithType<B>` is `Either<E, B>`, so the error type is carried unchanged.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<E, A> TypeConstructor for Either<E, A> {
    type Inner = A;
    type WithType<B> = Either<E, B>;
}

impl<A> TypeConstructor for Vec<A> {
    type Inner = A;
    type WithType<B> = Vec<B>;
}
