//! Either type - a value that is one of two alternatives.
//!
//! `Either<E, A>` is right-biased: `Right(A)` carries the success value and
//! every mapping, chaining and applicative operation acts on it, while
//! `Left(E)` carries the failure and passes through untouched.
//!
//! Besides the inherent methods on [`Either`], this module provides:
//!
//! - constructors and conversions: [`left`], [`right`], [`from_predicate`],
//!   [`from_option`], [`try_catch`], [`eitherize`], [`downcast`]
//! - traversals: [`traverse_array`], [`traverse_array_with_index`],
//!   [`sequence_array`], [`lefts`], [`rights`], [`separate`], [`alt_all`]
//! - error-accumulating validation: `ap_v`, `map2_v`, [`traverse_array_v`],
//!   [`sequence_array_v`], [`SequenceTupleV`]
//! - do-notation over an accumulated state (`do_`, `bind`, `let_with`, ...)
//! - stack-safe recursion: [`tail_rec`]
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::{self, Either};
//!
//! fn parse_port(text: &str) -> Either<String, u16> {
//!     either::try_catch(text.parse::<u16>(), |error| format!("{text}: {error}"))
//! }
//!
//! let port = parse_port("8080")
//!     .filter_or_else(|port| *port >= 1024, |port| format!("{port} is privileged"))
//!     .map(|port| port + 1);
//! assert_eq!(port, Either::Right(8081));
//!
//! let failed = parse_port("80").filter_or_else(|port| *port >= 1024, |port| format!("{port} is privileged"));
//! assert_eq!(failed, Either::Left("80 is privileged".to_string()));
//! ```

mod convert;
mod do_notation;
mod sequence;
mod tail_rec;
mod traverse;
mod validation;

pub use convert::{downcast, eitherize, from_option, from_predicate, try_catch};
pub use sequence::{SequenceTuple, SequenceTupleV};
pub use tail_rec::tail_rec;
pub use traverse::{
    alt_all, lefts, rights, separate, sequence_array, traverse_array, traverse_array_with_index,
};
pub use validation::{sequence_array_v, traverse_array_v};

use std::fmt;

use crate::format::{LogAttr, type_label};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Type Parameters
///
/// * `L` - The left type, conventionally the error
/// * `R` - The right type, conventionally the success value
///
/// # Examples
///
/// ```rust
/// use fpkit::either::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
///
/// let failure: Either<String, i32> = Either::Left("boom".to_string());
/// assert_eq!(failure.map(|x| x * 2), Either::Left("boom".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Either<L, R> {
    /// The left variant, conventionally the failure.
    Left(L),
    /// The right variant, conventionally the success.
    Right(R),
}

static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Either<u8, i32>: Copy);
static_assertions::assert_not_impl_any!(Either<std::rc::Rc<u8>, i32>: Send, Sync);

/// Creates a `Left` value.
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Creates a `Right` value.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Lifts a value into `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let value: Either<String, i32> = Either::of(7);
    /// assert_eq!(value, Either::Right(7));
    /// ```
    #[inline]
    pub const fn of(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this is `Right` and the value equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(3);
    /// assert!(right.elem(&3));
    /// assert!(!right.elem(&4));
    /// assert!(!Either::<&str, i32>::Left("3").elem(&3));
    /// ```
    #[inline]
    pub fn elem(&self, value: &R) -> bool
    where
        R: PartialEq,
    {
        matches!(self, Self::Right(inner) if inner == value)
    }

    /// Returns `true` if this is `Right` and the value satisfies `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Right(value) => predicate(value),
            Self::Left(_) => false,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Option<L>`, discarding a right value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a left value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Same as [`right`](Self::right); reads better at the end of a pipeline.
    #[inline]
    pub fn to_option(self) -> Option<R> {
        self.right()
    }

    /// Converts into a `Result`, `Right` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.unwrap_right(), "hello");
    /// ```
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Functor Operations
    // =========================================================================

    /// Applies `function` to the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `function` to the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps whichever side is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Replaces the right value with `value`.
    #[inline]
    pub fn map_to<T>(self, value: T) -> Either<L, T> {
        self.map(|_| value)
    }

    /// Swaps the `Left` and `Right` variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Applies the function held in `Right` to `argument`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let double: Either<String, fn(i32) -> i32> = Either::Right(|x| x * 2);
    /// assert_eq!(double.flap(21), Either::Right(42));
    /// ```
    #[inline]
    pub fn flap<A, B>(self, argument: A) -> Either<L, B>
    where
        R: FnOnce(A) -> B,
    {
        self.map(|function| function(argument))
    }

    // =========================================================================
    // Monad Operations
    // =========================================================================

    /// Chains a computation that may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// fn reciprocal(x: f64) -> Either<String, f64> {
    ///     if x == 0.0 { Either::Left("division by zero".to_string()) } else { Either::Right(1.0 / x) }
    /// }
    ///
    /// assert_eq!(Either::Right(4.0).and_then(reciprocal), Either::Right(0.25));
    /// assert!(Either::Right(0.0).and_then(reciprocal).is_left());
    /// ```
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Runs `function` for its failure only, keeping the original right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let check = |n: &i32| if *n > 0 { Either::Right(()) } else { Either::Left("not positive") };
    /// assert_eq!(Either::Right(5).chain_first(check), Either::Right(5));
    /// assert_eq!(Either::Right(-5).chain_first(check), Either::Left("not positive"));
    /// ```
    #[inline]
    pub fn chain_first<T, F>(self, function: F) -> Self
    where
        F: FnOnce(&R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Self::Left(value),
            Self::Right(value) => match function(&value) {
                Either::Left(error) => Self::Left(error),
                Either::Right(_) => Self::Right(value),
            },
        }
    }

    /// Chains a computation returning `Option`, turning `None` into `Left(on_none())`.
    #[inline]
    pub fn chain_option<T, F, N>(self, function: F, on_none: N) -> Either<L, T>
    where
        F: FnOnce(R) -> Option<T>,
        N: FnOnce() -> L,
    {
        self.and_then(|value| from_option(function(value), on_none))
    }

    /// Calls `function` with a reference to the right value.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to the left value.
    #[inline]
    pub fn inspect_left<F>(self, function: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Applicative Operations
    // =========================================================================

    /// Applies the function in `self` to the value in `argument`.
    ///
    /// Fail-fast: when both sides are `Left`, the left of `self` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let add_one: Either<&str, fn(i32) -> i32> = Either::Right(|x| x + 1);
    /// assert_eq!(add_one.ap(Either::Right(1)), Either::Right(2));
    ///
    /// let broken: Either<&str, fn(i32) -> i32> = Either::Left("first");
    /// assert_eq!(broken.ap(Either::Left("second")), Either::Left("first"));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, argument: Either<L, A>) -> Either<L, B>
    where
        R: FnOnce(A) -> B,
    {
        self.and_then(|function| argument.map(function))
    }

    /// Combines two values, keeping the one from `self`.
    #[inline]
    pub fn ap_first<T>(self, other: Either<L, T>) -> Self {
        self.map2(other, |value, _| value)
    }

    /// Combines two values, keeping the one from `other`.
    #[inline]
    pub fn ap_second<T>(self, other: Either<L, T>) -> Either<L, T> {
        self.map2(other, |_, value| value)
    }

    /// Combines two right values with `function`; the first `Left` wins.
    #[inline]
    pub fn map2<T, U, F>(self, other: Either<L, T>, function: F) -> Either<L, U>
    where
        F: FnOnce(R, T) -> U,
    {
        match (self, other) {
            (Self::Right(first), Either::Right(second)) => Either::Right(function(first, second)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    /// Pairs two right values.
    #[inline]
    pub fn product<T>(self, other: Either<L, T>) -> Either<L, (R, T)> {
        self.map2(other, |first, second| (first, second))
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Returns `self` if it is `Right`, otherwise evaluates `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let primary: Either<&str, u16> = Either::Left("unset");
    /// assert_eq!(primary.alt(|| Either::Right(8080)), Either::Right(8080));
    /// ```
    #[inline]
    pub fn alt<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Right(value) => Self::Right(value),
            Self::Left(_) => alternative(),
        }
    }

    /// Recovers from a left value with a computation that may fail again.
    #[inline]
    pub fn or_else<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Returns the right value, or computes one from the left value.
    #[inline]
    pub fn get_or_else<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Folds the right value into `initial`; a `Left` yields `initial`.
    #[inline]
    pub fn reduce<T, F>(self, initial: T, function: F) -> T
    where
        F: FnOnce(T, R) -> T,
    {
        match self {
            Self::Left(_) => initial,
            Self::Right(value) => function(initial, value),
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Turns a right value that fails `predicate` into `Left(on_false(value))`.
    #[inline]
    pub fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Right(value) if predicate(&value) => Self::Right(value),
            Self::Right(value) => Self::Left(on_false(value)),
            Self::Left(error) => Self::Left(error),
        }
    }

    /// Maps the right value through `function`; `None` becomes `Left(on_none())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let parse = |text: &str| text.parse::<i32>().ok();
    /// let invalid = || "invalid".to_string();
    ///
    /// assert_eq!(Either::Right("42").filter_map_or_else(parse, invalid), Either::Right(42));
    /// assert_eq!(Either::Right("abc").filter_map_or_else(parse, invalid), Either::Left("invalid".to_string()));
    /// ```
    #[inline]
    pub fn filter_map_or_else<T, F, N>(self, function: F, on_none: N) -> Either<L, T>
    where
        F: FnOnce(R) -> Option<T>,
        N: FnOnce() -> L,
    {
        self.chain_option(function, on_none)
    }

    // =========================================================================
    // Logging
    // =========================================================================

    /// Describes this value as a structured-logging field.
    ///
    /// The key is `"value"` for `Right` and `"error"` for `Left`.
    #[inline]
    pub fn log_attr(&self) -> LogAttr<'_>
    where
        L: fmt::Debug,
        R: fmt::Debug,
    {
        match self {
            Self::Left(error) => LogAttr::error(error),
            Self::Right(value) => LogAttr::value(value),
        }
    }

    /// Emits a `DEBUG` event describing this value and returns it unchanged.
    ///
    /// The event has target `fpkit::log`, `prefix` as its message and either
    /// a `value` or an `error` field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let total: Either<String, i32> = Either::Right(2).log("parsed").map(|x| x * 10);
    /// assert_eq!(total, Either::Right(20));
    /// ```
    #[cfg(feature = "logging")]
    #[inline]
    pub fn log(self, prefix: &str) -> Self
    where
        L: fmt::Debug,
        R: fmt::Debug,
    {
        self.log_attr().emit(prefix);
        self
    }
}

// =============================================================================
// Nested and Default-based Operations
// =============================================================================

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.and_then(std::convert::identity)
    }
}

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or `L::default()` for a `Right`.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or `R::default()` for a `Left`.
    #[inline]
    pub fn unwrap_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

impl<L: Default, R: Default> Either<L, R> {
    /// Splits into a `(right, left)` pair, filling the missing side with its default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// assert_eq!(Either::<String, i32>::Right(3).into_parts(), (3, String::new()));
    /// assert_eq!(Either::<String, i32>::Left("e".into()).into_parts(), (0, "e".to_string()));
    /// ```
    #[inline]
    pub fn into_parts(self) -> (R, L) {
        match self {
            Self::Left(value) => (R::default(), value),
            Self::Right(value) => (value, L::default()),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

/// Renders `Left[Type](value)` or `Right[Type](value)`.
///
/// The payload is written with `Debug`, so collections and plain structs render too.
impl<L: fmt::Debug, R: fmt::Debug> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left[{}]({value:?})", type_label::<L>()),
            Self::Right(value) => write!(formatter, "Right[{}]({value:?})", type_label::<R>()),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
