//! Control structures.
//!
//! - [`tail_rec`]: stack-safe recursion for a pure step function
//!
//! The effectful variants live next to their types:
//! [`either::tail_rec`](crate::either::tail_rec),
//! [`option::tail_rec`](crate::option::tail_rec) and
//! [`ChainRec`](crate::typeclass::ChainRec).

mod tail_rec;

pub use tail_rec::tail_rec;
