//! Constructors that convert other values into `Either`.

use std::any::Any;

use super::Either;
use crate::error::Error;

/// Returns `Right(value)` if `predicate` holds, otherwise `Left(on_false(value))`.
///
/// # Examples
///
/// ```rust
/// use fpkit::either::{self, Either};
///
/// let even = |n: i32| either::from_predicate(n, |n| n % 2 == 0, |n| format!("{n} is odd"));
/// assert_eq!(even(4), Either::Right(4));
/// assert_eq!(even(3), Either::Left("3 is odd".to_string()));
/// ```
#[inline]
pub fn from_predicate<E, A, P, F>(value: A, predicate: P, on_false: F) -> Either<E, A>
where
    P: FnOnce(&A) -> bool,
    F: FnOnce(A) -> E,
{
    if predicate(&value) {
        Either::Right(value)
    } else {
        Either::Left(on_false(value))
    }
}

/// Converts `Some(a)` into `Right(a)` and `None` into `Left(on_none())`.
#[inline]
pub fn from_option<E, A, F>(option: Option<A>, on_none: F) -> Either<E, A>
where
    F: FnOnce() -> E,
{
    match option {
        Some(value) => Either::Right(value),
        None => Either::Left(on_none()),
    }
}

/// Converts a `Result`, mapping its error with `on_error`.
///
/// # Examples
///
/// ```rust
/// use fpkit::either::{self, Either};
///
/// let parsed: Either<String, i32> = either::try_catch("12".parse::<i32>(), |error| error.to_string());
/// assert_eq!(parsed, Either::Right(12));
/// ```
#[inline]
pub fn try_catch<E, A, X, F>(result: Result<A, X>, on_error: F) -> Either<E, A>
where
    F: FnOnce(X) -> E,
{
    result.map_err(on_error).into()
}

/// Lifts a `Result`-returning function into one returning `Either`.
///
/// # Examples
///
/// ```rust
/// use fpkit::either::{self, Either};
///
/// let parse = either::eitherize(|text: &str| text.parse::<u8>());
/// assert_eq!(parse("7"), Either::Right(7));
/// assert!(parse("700").is_left());
/// ```
pub fn eitherize<X, A, E, F>(function: F) -> impl Fn(X) -> Either<E, A>
where
    F: Fn(X) -> Result<A, E>,
{
    move |input| function(input).into()
}

/// Recovers a concrete value from a `Box<dyn Any>`.
///
/// A value of another type yields `Left(Error::TypeMismatch)` naming `A`.
///
/// # Examples
///
/// ```rust
/// use fpkit::either::{self, Either};
/// use std::any::Any;
///
/// let boxed: Box<dyn Any> = Box::new(5_u32);
/// assert_eq!(either::downcast::<u32>(boxed), Either::Right(5));
/// ```
pub fn downcast<A: Any>(value: Box<dyn Any>) -> Either<Error, A> {
    value
        .downcast::<A>()
        .map(|boxed| *boxed)
        .map_err(|_| Error::TypeMismatch {
            expected: std::any::type_name::<A>(),
        })
        .into()
}
