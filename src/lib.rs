//! # fpkit
//!
//! Combinators over Rust's two everyday sum types: [`Either`](either::Either)
//! and [`Option`].
//!
//! ## Overview
//!
//! - **Either**: a left/right tagged enum with functor, applicative and monad
//!   operations, error-accumulating validation, do-notation and traversals
//! - **Option**: the same operation family for `std::option::Option`, through
//!   the [`OptionExt`](option::OptionExt) extension trait
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Traversable,
//!   Filterable, Semigroup, Monoid and friends
//! - **Optics**: Lens for updating nested fields in bind/let pipelines
//! - **Control**: stack-safe tail recursion
//! - **Function Composition**: `pipe!`, `compose!`, `curry!`, `uncurry!`
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Lenses)]`, `curry!` and `uncurry!`
//! - `logging` (default): `tracing`-based `log` helpers
//! - `serde`: serialization support for `Either` and the wrapper types
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     from_option(input.parse().ok(), || format!("not a number: {input}"))
//! }
//!
//! let total = parse("20").map2(parse("22"), |a, b| a + b);
//! assert_eq!(total, Either::Right(42));
//!
//! let failed = parse("20").map2(parse("x"), |a, b| a + b);
//! assert_eq!(failed, Either::Left("not a number: x".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and free functions.
///
/// # Usage
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::control::*;
    pub use crate::either::{Either, SequenceTuple, SequenceTupleV, from_option, from_predicate};
    pub use crate::error::Error;
    pub use crate::optics::*;
    pub use crate::option::OptionExt;
    pub use crate::typeclass::*;
}

pub mod compose;
pub mod control;
pub mod either;
pub mod error;
pub mod format;
pub mod optics;
pub mod option;
pub mod typeclass;

pub use error::Error;

#[cfg(feature = "derive")]
pub use fpkit_derive::{Lenses, curry, uncurry};
