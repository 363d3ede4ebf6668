//! Library error type.
//!
//! Every combinator in this crate is generic over its error type. The few
//! conversions that have to invent an error of their own use [`Error`].

/// Errors produced by the crate's own conversions.
///
/// # Examples
///
/// ```rust
/// use fpkit::Error;
/// use fpkit::either::{self, Either};
/// use std::any::Any;
///
/// let boxed: Box<dyn Any> = Box::new("not a number");
/// let result: Either<Error, i32> = either::downcast(boxed);
/// assert_eq!(result, Either::Left(Error::TypeMismatch { expected: "i32" }));
/// assert_eq!(
///     result.unwrap_left().to_string(),
///     "value is not of the expected type `i32`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// An `Option` was `None` where a value was required.
    #[error("expected a value, found none")]
    MissingValue,

    /// A dynamically typed value was not of the requested type.
    #[error("value is not of the expected type `{expected}`")]
    TypeMismatch {
        /// The requested type, as reported by `std::any::type_name`.
        expected: &'static str,
    },
}
