//! `ChainRec` type class - monadic tail recursion without stack growth.
//!
//! `tail_rec_m(initial, step)` repeatedly feeds the state through `step`.
//! Inside the context, `Left(state)` means "continue with this state" and
//! `Right(value)` means "done". A failing context (`None`, outer `Left`) stops
//! the loop immediately.
//!
//! # Laws
//!
//! ```text
//! tail_rec_m(a, |s| f(s).fmap(Either::Right)) == f(a)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::ChainRec;
//!
//! let sum: Option<u64> = <Option<()>>::tail_rec_m((0u64, 0u64), |(n, acc)| {
//!     if n > 100_000 {
//!         Some(Either::Right(acc))
//!     } else {
//!         Some(Either::Left((n + 1, acc + n)))
//!     }
//! });
//! assert_eq!(sum, Some(5_000_050_000));
//! ```

use super::monad::Monad;
use crate::either::Either;

/// A monad supporting stack-safe recursion through its context.
pub trait ChainRec: Monad {
    /// Runs `step` from `initial` until it lands on a `Right` or fails.
    ///
    /// There is no iteration bound; a step that always continues never returns.
    ///
    /// # Arguments
    ///
    /// * `initial` - The starting state
    /// * `step` - Produces either the next state (`Left`) or the result (`Right`)
    fn tail_rec_m<S, B, F>(initial: S, step: F) -> Self::WithType<B>
    where
        F: FnMut(S) -> Self::WithType<Either<S, B>>;
}

impl<A> ChainRec for Option<A> {
    #[inline]
    fn tail_rec_m<S, B, F>(initial: S, step: F) -> Option<B>
    where
        F: FnMut(S) -> Option<Either<S, B>>,
    {
        crate::option::tail_rec(initial, step)
    }
}

impl<E, A> ChainRec for Either<E, A> {
    #[inline]
    fn tail_rec_m<S, B, F>(initial: S, step: F) -> Either<E, B>
    where
        F: FnMut(S) -> Either<E, Either<S, B>>,
    {
        crate::either::tail_rec(initial, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_tail_rec_m_stops_on_none() {
        let result: Option<i32> = <Option<()>>::tail_rec_m(0, |n| {
            if n == 3 { None } else { Some(Either::Left(n + 1)) }
        });
        assert_eq!(result, None);
    }

    #[rstest]
    fn either_tail_rec_m_counts_down() {
        let result: Either<String, &str> =
            <Either<String, ()>>::tail_rec_m(10_000u32, |n| {
                Either::Right(if n == 0 { Either::Right("landed") } else { Either::Left(n - 1) })
            });
        assert_eq!(result, Either::Right("landed"));
    }

    #[rstest]
    fn either_tail_rec_m_propagates_error() {
        let result: Either<String, u32> = <Either<String, ()>>::tail_rec_m(0u32, |n| {
            if n == 5 {
                Either::Left(format!("stopped at {n}"))
            } else {
                Either::Right(Either::Left(n + 1))
            }
        });
        assert_eq!(result, Either::Left("stopped at 5".to_string()));
    }
}
