//! Small combinators used as arguments to the combinators elsewhere in the crate.

/// Returns its argument unchanged.
///
/// Handy as the function passed to `map`, `traverse` or `fold` when no
/// transformation is needed.
///
/// # Examples
///
/// ```
/// use fpkit::compose::identity;
/// use fpkit::either::{self, Either};
///
/// let collected: Either<&str, Vec<i32>> =
///     either::traverse_array(vec![Either::Right(1), Either::Right(2)], identity);
/// assert_eq!(collected, Either::Right(vec![1, 2]));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its input and yields a clone of `value`.
///
/// # Examples
///
/// ```
/// use fpkit::compose::constant;
/// use fpkit::either::Either;
///
/// let failed: Either<String, i32> = Either::Left("timeout".to_string());
/// assert_eq!(failed.get_or_else(constant(-1)), -1);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function.
///
/// `flip(flip(f))` behaves like `f`.
///
/// # Examples
///
/// ```
/// use fpkit::compose::flip;
///
/// let prefix = |text: &str, prefix: &str| format!("{prefix}{text}");
/// let prefixed = flip(prefix);
/// assert_eq!(prefixed("v", "1.2"), "v1.2");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn constant_is_reusable() {
        let zero = constant::<_, &str>(0);
        assert_eq!(zero("a"), 0);
        assert_eq!(zero("b"), 0);
    }

    #[rstest]
    #[case(10, 3)]
    #[case(-4, 9)]
    fn double_flip_is_original(#[case] first: i32, #[case] second: i32) {
        let subtract = |a: i32, b: i32| a - b;
        let twice = flip(flip(subtract));
        assert_eq!(twice(first, second), subtract(first, second));
    }
}
