/// Threads a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` evaluates `h(g(f(x)))`. With only a value, the value
/// is returned as-is.
///
/// # Examples
///
/// ```
/// use fpkit::either::Either;
/// use fpkit::pipe;
///
/// fn parse(text: &str) -> Either<String, i32> {
///     text.trim().parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
/// }
///
/// let doubled = pipe!(" 21 ", parse, |parsed: Either<String, i32>| parsed.map(|n| n * 2));
/// assert_eq!(doubled, Either::Right(42));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $($function:expr),+ $(,)?) => {{
        let value = $value;
        $(
            let value = ($function)(value);
        )+
        value
    }};
}
