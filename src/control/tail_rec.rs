//! Stack-safe recursion for pure step functions.
//!
//! Rust does not guarantee tail call optimization, so a deeply recursive
//! function can overflow the stack. [`tail_rec`] expresses the recursion as a
//! step function returning either the next argument (`Left`) or the result
//! (`Right`), and runs it in a loop.
//!
//! # Examples
//!
//! ## Factorial
//!
//! ```rust
//! use fpkit::control::tail_rec;
//! use fpkit::either::Either;
//!
//! let factorial = |n: u64| {
//!     tail_rec((n, 1_u64), |(n, accumulator)| {
//!         if n <= 1 {
//!             Either::Right(accumulator)
//!         } else {
//!             Either::Left((n - 1, n * accumulator))
//!         }
//!     })
//! };
//!
//! assert_eq!(factorial(20), 2_432_902_008_176_640_000);
//! ```
//!
//! ## Mutual Recursion
//!
//! Mutually recursive functions become one step function over a tagged state.
//!
//! ```rust
//! use fpkit::control::tail_rec;
//! use fpkit::either::Either;
//!
//! #[derive(Clone, Copy)]
//! enum Parity { Even(u64), Odd(u64) }
//!
//! let is_even = |n: u64| {
//!     tail_rec(Parity::Even(n), |state| match state {
//!         Parity::Even(0) => Either::Right(true),
//!         Parity::Odd(0) => Either::Right(false),
//!         Parity::Even(n) => Either::Left(Parity::Odd(n - 1)),
//!         Parity::Odd(n) => Either::Left(Parity::Even(n - 1)),
//!     })
//! };
//!
//! assert!(is_even(100_000));
//! assert!(!is_even(100_001));
//! ```

use crate::either::Either;

/// Runs `step` until it returns `Right`, feeding each `Left` back in.
///
/// There is no iteration bound: a step that never returns `Right` loops
/// forever.
pub fn tail_rec<A, B, F>(initial: A, mut step: F) -> B
where
    F: FnMut(A) -> Either<A, B>,
{
    let mut current = initial;

    loop {
        match step(current) {
            Either::Left(next) => current = next,
            Either::Right(done) => return done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(10, 55)]
    #[case(90, 2_880_067_194_370_816_120)]
    fn fibonacci(#[case] n: u32, #[case] expected: u64) {
        let result = tail_rec((n, 0_u64, 1_u64), |(remaining, current, next)| {
            if remaining == 0 {
                Either::Right(current)
            } else {
                Either::Left((remaining - 1, next, current + next))
            }
        });
        assert_eq!(result, expected);
    }

    #[rstest]
    fn step_runs_once_per_iteration() {
        let mut calls = 0;
        let result = tail_rec(3, |n: i32| {
            calls += 1;
            if n == 0 { Either::Right("done") } else { Either::Left(n - 1) }
        });
        assert_eq!(result, "done");
        assert_eq!(calls, 4);
    }
}
