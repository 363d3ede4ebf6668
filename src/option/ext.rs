use std::fmt;

use crate::either::Either;
use crate::error::Error;
use crate::format::{DisplayOption, LogAttr};
use crate::optics::Lens;

/// Extension methods for [`Option`].
///
/// Covers the parts of the `Either` operation family that `std` does not
/// already provide. Partitioning, filtering and `alt` come from the
/// [`Filterable`](crate::typeclass::Filterable),
/// [`Foldable`](crate::typeclass::Foldable) and [`Alt`](crate::typeclass::Alt)
/// impls instead.
///
/// # Examples
///
/// ```rust
/// use fpkit::option::OptionExt;
///
/// let add: Option<fn(i32) -> i32> = Some(|x| x + 1);
/// assert_eq!(add.ap(Some(1)), Some(2));
///
/// assert_eq!(Some(3).fold(|| 0, |x| x * 2), 6);
/// assert_eq!(None::<i32>.to_either(|| "missing"), fpkit::either::Either::Left("missing"));
/// ```
pub trait OptionExt<A>: Sized {
    /// Applies the function in `self` to the value in `argument`.
    fn ap<B, C>(self, argument: Option<B>) -> Option<C>
    where
        A: FnOnce(B) -> C;

    /// Keeps the value of `self` when both are `Some`.
    fn ap_first<B>(self, other: Option<B>) -> Option<A>;

    /// Keeps the value of `other` when both are `Some`.
    fn ap_second<B>(self, other: Option<B>) -> Option<B>;

    /// Runs `function` for its `None` only, keeping the original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::option::OptionExt;
    ///
    /// let positive = |n: &i32| (*n > 0).then_some(());
    /// assert_eq!(Some(4).chain_first(positive), Some(4));
    /// assert_eq!(Some(-4).chain_first(positive), None);
    /// ```
    fn chain_first<B, F>(self, function: F) -> Option<A>
    where
        F: FnOnce(&A) -> Option<B>;

    /// Eliminates the option: `on_none()` for `None`, `on_some(a)` for `Some(a)`.
    fn fold<B, N, S>(self, on_none: N, on_some: S) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B;

    /// Returns `true` if this is `Some` and the value equals `value`.
    fn elem(&self, value: &A) -> bool
    where
        A: PartialEq;

    /// Converts into `Either`, producing the left value with `on_none`.
    fn to_either<E, F>(self, on_none: F) -> Either<E, A>
    where
        F: FnOnce() -> E;

    /// Converts into `Either`, using [`Error::MissingValue`] for `None`.
    fn to_either_or_missing(self) -> Either<Error, A>;

    /// Splits into the value (or `A::default()`) and whether it was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::option::OptionExt;
    ///
    /// assert_eq!(Some(5).into_parts(), (5, true));
    /// assert_eq!(None::<i32>.into_parts(), (0, false));
    /// ```
    fn into_parts(self) -> (A, bool)
    where
        A: Default;

    /// Returns an adapter rendering `Some[Type](value)` or `None[Type]`.
    fn display(&self) -> DisplayOption<'_, A>;

    /// Describes this value as a structured-logging field.
    ///
    /// The key is `"value"` for `Some` and `"none"` for `None`.
    fn log_attr(&self) -> LogAttr<'_>
    where
        A: fmt::Debug;

    /// Emits a `DEBUG` event describing this value and returns it unchanged.
    #[cfg(feature = "logging")]
    fn log(self, prefix: &str) -> Self
    where
        A: fmt::Debug;

    // =========================================================================
    // Do-notation
    // =========================================================================

    /// Runs `function` on the state and stores its value with `setter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::option::{self, OptionExt};
    ///
    /// let total = option::do_(3_u32)
    ///     .bind(|count, price| (count, price), |count| (*count > 0).then_some(250_u32))
    ///     .map(|(count, price)| count * price);
    /// assert_eq!(total, Some(750));
    /// ```
    fn bind<T, S2, St, F>(self, setter: St, function: F) -> Option<S2>
    where
        St: FnOnce(A, T) -> S2,
        F: FnOnce(&A) -> Option<T>;

    /// Computes a plain value from the state and stores it with `setter`.
    fn let_with<T, S2, St, F>(self, setter: St, function: F) -> Option<S2>
    where
        St: FnOnce(A, T) -> S2,
        F: FnOnce(&A) -> T;

    /// Stores a constant with `setter`.
    fn let_to<T, S2, St>(self, setter: St, value: T) -> Option<S2>
    where
        St: FnOnce(A, T) -> S2;

    /// Wraps the value into an initial state with `setter`.
    fn bind_to<S, St>(self, setter: St) -> Option<S>
    where
        St: FnOnce(A) -> S;

    /// Stores the value of an independent computation with `setter`.
    fn ap_s<T, S2, St>(self, setter: St, argument: Option<T>) -> Option<S2>
    where
        St: FnOnce(A, T) -> S2;

    /// Replaces the field focused by `lens` with the value of `function`.
    fn bind_l<T, L, F>(self, lens: &L, function: F) -> Self
    where
        L: Lens<A, T>,
        F: FnOnce(&T) -> Option<T>;

    /// Replaces the field focused by `lens` with `function` of its current value.
    fn let_l<T, L, F>(self, lens: &L, function: F) -> Self
    where
        L: Lens<A, T>,
        F: FnOnce(&T) -> T;

    /// Sets the field focused by `lens` to `value`.
    fn let_to_l<T, L>(self, lens: &L, value: T) -> Self
    where
        L: Lens<A, T>;

    /// Sets the field focused by `lens` from an independent computation.
    fn ap_s_l<T, L>(self, lens: &L, argument: Option<T>) -> Self
    where
        L: Lens<A, T>;
}

impl<A> OptionExt<A> for Option<A> {
    #[inline]
    fn ap<B, C>(self, argument: Option<B>) -> Option<C>
    where
        A: FnOnce(B) -> C,
    {
        self.zip(argument).map(|(function, value)| function(value))
    }

    #[inline]
    fn ap_first<B>(self, other: Option<B>) -> Self {
        self.zip(other).map(|(value, _)| value)
    }

    #[inline]
    fn ap_second<B>(self, other: Option<B>) -> Option<B> {
        self.and(other)
    }

    #[inline]
    fn chain_first<B, F>(self, function: F) -> Self
    where
        F: FnOnce(&A) -> Option<B>,
    {
        self.filter(|value| function(value).is_some())
    }

    #[inline]
    fn fold<B, N, S>(self, on_none: N, on_some: S) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B,
    {
        self.map_or_else(on_none, on_some)
    }

    #[inline]
    fn elem(&self, value: &A) -> bool
    where
        A: PartialEq,
    {
        self.as_ref() == Some(value)
    }

    #[inline]
    fn to_either<E, F>(self, on_none: F) -> Either<E, A>
    where
        F: FnOnce() -> E,
    {
        crate::either::from_option(self, on_none)
    }

    #[inline]
    fn to_either_or_missing(self) -> Either<Error, A> {
        self.to_either(|| Error::MissingValue)
    }

    #[inline]
    fn into_parts(self) -> (A, bool)
    where
        A: Default,
    {
        match self {
            Some(value) => (value, true),
            None => (A::default(), false),
        }
    }

    #[inline]
    fn display(&self) -> DisplayOption<'_, A> {
        DisplayOption(self)
    }

    #[inline]
    fn log_attr(&self) -> LogAttr<'_>
    where
        A: fmt::Debug,
    {
        match self {
            Some(value) => LogAttr::value(value),
            None => LogAttr::none(),
        }
    }

    #[cfg(feature = "logging")]
    #[inline]
    fn log(self, prefix: &str) -> Self
    where
        A: fmt::Debug,
    {
        self.log_attr().emit(prefix);
        self
    }

    #[inline]
    fn bind<T, S2, St, F>(self, setter: St, function: F) -> Option<S2>
    where
        St: FnOnce(A, T) -> S2,
        F: FnOnce(&A) -> Option<T>,
    {
        self.and_then(|state| function(&state).map(|value| setter(state, value)))
    }

    #[inline]
    fn let_with<T, S2, St, F>(self, setter: St, function: F) -> Option<S2>
    where
        St: FnOnce(A, T) -> S2,
        F: FnOnce(&A) -> T,
    {
        self.map(|state| {
            let value = function(&state);
            setter(state, value)
        })
    }

    #[inline]
    fn let_to<T, S2, St>(self, setter: St, value: T) -> Option<S2>
    where
        St: FnOnce(A, T) -> S2,
    {
        self.map(|state| setter(state, value))
    }

    #[inline]
    fn bind_to<S, St>(self, setter: St) -> Option<S>
    where
        St: FnOnce(A) -> S,
    {
        self.map(setter)
    }

    #[inline]
    fn ap_s<T, S2, St>(self, setter: St, argument: Option<T>) -> Option<S2>
    where
        St: FnOnce(A, T) -> S2,
    {
        self.zip(argument).map(|(state, value)| setter(state, value))
    }

    #[inline]
    fn bind_l<T, L, F>(self, lens: &L, function: F) -> Self
    where
        L: Lens<A, T>,
        F: FnOnce(&T) -> Option<T>,
    {
        self.and_then(|state| function(lens.get(&state)).map(|value| lens.set(state, value)))
    }

    #[inline]
    fn let_l<T, L, F>(self, lens: &L, function: F) -> Self
    where
        L: Lens<A, T>,
        F: FnOnce(&T) -> T,
    {
        self.map(|state| lens.modify_ref(state, function))
    }

    #[inline]
    fn let_to_l<T, L>(self, lens: &L, value: T) -> Self
    where
        L: Lens<A, T>,
    {
        self.map(|state| lens.set(state, value))
    }

    #[inline]
    fn ap_s_l<T, L>(self, lens: &L, argument: Option<T>) -> Self
    where
        L: Lens<A, T>,
    {
        self.zip(argument).map(|(state, value)| lens.set(state, value))
    }
}
