use super::Either;

/// Runs `step` in a loop until it lands or fails.
///
/// `step` returns `Right(Left(next))` to continue with `next`,
/// `Right(Right(done))` to finish with `done`, or `Left(error)` to stop with
/// the error. The loop runs in constant stack space and has no iteration
/// bound.
///
/// # Examples
///
/// ```rust
/// use fpkit::either::{self, Either};
///
/// // Sum 1..=n, refusing to go past u16::MAX.
/// let sum = |n: u16| {
///     either::tail_rec((n, 0_u16), |(remaining, total)| {
///         if remaining == 0 {
///             return Either::Right(Either::Right(total));
///         }
///         match total.checked_add(remaining) {
///             Some(total) => Either::Right(Either::Left((remaining - 1, total))),
///             None => Either::Left("overflow"),
///         }
///     })
/// };
///
/// assert_eq!(sum(100), Either::Right(5050));
/// assert_eq!(sum(1000), Either::Left("overflow"));
/// ```
pub fn tail_rec<E, A, B, F>(initial: A, mut step: F) -> Either<E, B>
where
    F: FnMut(A) -> Either<E, Either<A, B>>,
{
    let mut current = initial;

    loop {
        match step(current) {
            Either::Left(error) => return Either::Left(error),
            Either::Right(Either::Left(next)) => current = next,
            Either::Right(Either::Right(done)) => return Either::Right(done),
        }
    }
}
