//! Optics for immutable data manipulation.
//!
//! Only lenses are provided: a [`Lens`] focuses on one field of a struct,
//! and composed lenses reach into nested structs. With the `derive` feature,
//! `#[derive(Lenses)]` generates one `{field}_lens()` constructor per field.
//!
//! # Example
//!
//! ```
//! use fpkit::either::Either;
//! use fpkit::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Order { quantity: u32, total_cents: u64 }
//!
//! let quantity = lens!(Order, quantity);
//! let total = lens!(Order, total_cents);
//!
//! let order = Either::<String, _>::do_(Order { quantity: 0, total_cents: 0 })
//!     .let_to_l(&quantity, 3)
//!     .bind_l(&total, |cents| Either::Right(cents + 3 * 499));
//!
//! assert_eq!(order, Either::Right(Order { quantity: 3, total_cents: 1497 }));
//! ```

mod lens;

pub use lens::{ComposedLens, FunctionLens, Lens};
