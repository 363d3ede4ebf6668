/// Composes functions from right to left.
///
/// `compose!(f, g, h)` returns a closure computing `f(g(h(x)))`; it is the
/// point-free counterpart of [`pipe!`](crate::pipe) with the functions in
/// reverse order. A single function is returned unchanged.
///
/// # Examples
///
/// ```
/// use fpkit::compose;
/// use fpkit::either::Either;
///
/// let validate = |n: i32| if n >= 0 { Either::Right(n) } else { Either::Left(format!("{n} < 0")) };
/// let render = |checked: Either<String, i32>| checked.fold(|error| error, |n| n.to_string());
///
/// let check_and_render = compose!(render, validate);
/// assert_eq!(check_and_render(7), "7");
/// assert_eq!(check_and_render(-1), "-1 < 0");
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}
