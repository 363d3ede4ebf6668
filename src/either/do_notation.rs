//! Do-notation: building up a state value step by step inside `Either`.
//!
//! A pipeline starts with [`Either::do_`] and threads a state `S` through
//! `bind`/`let_with`/`ap_s` steps. Each step computes a value from the
//! current state and a setter stores it, producing the next state. The first
//! `Left` short-circuits the remaining steps.
//!
//! The `_l` variants use a [`Lens`] as the setter and read their input from
//! the focused field.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//!
//! #[derive(Debug, PartialEq)]
//! struct Request { user: String, limit: u32 }
//!
//! fn lookup(id: u32) -> Either<String, String> {
//!     if id == 7 { Either::Right("ada".to_string()) } else { Either::Left(format!("no user {id}")) }
//! }
//!
//! let request = Either::do_(7)
//!     .bind(|_, user| user, |id| lookup(*id))
//!     .let_with(|user, limit| Request { user, limit }, |user| user.len() as u32 * 10);
//! assert_eq!(request, Either::Right(Request { user: "ada".to_string(), limit: 30 }));
//! ```

use super::Either;
use crate::optics::Lens;

impl<E, S> Either<E, S> {
    /// Starts a do-notation pipeline with `state`.
    #[inline]
    pub const fn do_(state: S) -> Self {
        Self::Right(state)
    }

    /// Runs `function` on the state and stores its right value with `setter`.
    #[inline]
    pub fn bind<T, S2, St, F>(self, setter: St, function: F) -> Either<E, S2>
    where
        St: FnOnce(S, T) -> S2,
        F: FnOnce(&S) -> Either<E, T>,
    {
        self.and_then(|state| function(&state).map(|value| setter(state, value)))
    }

    /// Computes a plain value from the state and stores it with `setter`.
    #[inline]
    pub fn let_with<T, S2, St, F>(self, setter: St, function: F) -> Either<E, S2>
    where
        St: FnOnce(S, T) -> S2,
        F: FnOnce(&S) -> T,
    {
        self.map(|state| {
            let value = function(&state);
            setter(state, value)
        })
    }

    /// Stores a constant with `setter`.
    #[inline]
    pub fn let_to<T, S2, St>(self, setter: St, value: T) -> Either<E, S2>
    where
        St: FnOnce(S, T) -> S2,
    {
        self.map(|state| setter(state, value))
    }

    /// Stores the right value of an independent computation with `setter`.
    ///
    /// `argument` does not see the state, so it is evaluated up front.
    #[inline]
    pub fn ap_s<T, S2, St>(self, setter: St, argument: Either<E, T>) -> Either<E, S2>
    where
        St: FnOnce(S, T) -> S2,
    {
        self.map2(argument, setter)
    }

    /// Replaces the field focused by `lens` with the right value of `function`.
    #[inline]
    pub fn bind_l<A, L, F>(self, lens: &L, function: F) -> Self
    where
        L: Lens<S, A>,
        F: FnOnce(&A) -> Either<E, A>,
    {
        self.and_then(|state| function(lens.get(&state)).map(|value| lens.set(state, value)))
    }

    /// Replaces the field focused by `lens` with `function` of its current value.
    #[inline]
    pub fn let_l<A, L, F>(self, lens: &L, function: F) -> Self
    where
        L: Lens<S, A>,
        F: FnOnce(&A) -> A,
    {
        self.map(|state| lens.modify_ref(state, function))
    }

    /// Sets the field focused by `lens` to `value`.
    #[inline]
    pub fn let_to_l<A, L>(self, lens: &L, value: A) -> Self
    where
        L: Lens<S, A>,
    {
        self.map(|state| lens.set(state, value))
    }

    /// Sets the field focused by `lens` from an independent computation.
    #[inline]
    pub fn ap_s_l<A, L>(self, lens: &L, argument: Either<E, A>) -> Self
    where
        L: Lens<S, A>,
    {
        self.map2(argument, |state, value| lens.set(state, value))
    }
}

impl<E, A> Either<E, A> {
    /// Wraps the right value into an initial state with `setter`.
    #[inline]
    pub fn bind_to<S, St>(self, setter: St) -> Either<E, S>
    where
        St: FnOnce(A) -> S,
    {
        self.map(setter)
    }
}
