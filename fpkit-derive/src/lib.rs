//! Procedural macros for `fpkit`.
//!
//! These are re-exported from `fpkit` when its `derive` feature is enabled;
//! depend on `fpkit` rather than on this crate directly.
//!
//! - [`Lenses`]: one lens constructor per named struct field
//! - [`curry!`]: turns a multi-argument closure or function into nested closures
//! - [`uncurry!`]: turns nested closures back into a multi-argument closure
//!
//! # Example
//!
//! ```rust,ignore
//! use fpkit::optics::Lens;
//! use fpkit::{Lenses, curry, uncurry};
//!
//! #[derive(Clone, Lenses)]
//! struct Limits { burst: u32, per_second: u32 }
//!
//! let burst = Limits::burst_lens();
//! let raised = burst.set(Limits { burst: 10, per_second: 5 }, 20);
//! assert_eq!(raised.burst, 20);
//!
//! let clamp = curry!(|low: u32, high: u32, value: u32| value.clamp(low, high));
//! assert_eq!(clamp(1)(10)(42), 10);
//!
//! let clamp_again = uncurry!(clamp, 3);
//! assert_eq!(clamp_again(1, 10, 0), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;
mod lenses;

use proc_macro::TokenStream;

/// Generates a `{field}_lens()` constructor for every named field.
///
/// Each constructor returns `impl fpkit::optics::Lens<Self, FieldType> + Clone`
/// and has the same visibility as its field. Generic structs are supported;
/// call the constructor on the concrete type (`Wrapper::<i32>::value_lens()`).
///
/// Tuple structs, unit structs, enums and unions are rejected at compile time.
///
/// # Example
///
/// ```rust,ignore
/// use fpkit::Lenses;
/// use fpkit::optics::Lens;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// pub struct Retry {
///     pub attempts: u32,
///     pub backoff_ms: u64,
/// }
///
/// let retry = Retry { attempts: 1, backoff_ms: 100 };
/// let backoff = Retry::backoff_ms_lens();
/// assert_eq!(*backoff.get(&retry), 100);
/// assert_eq!(backoff.modify(retry, |ms| ms * 2).backoff_ms, 200);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Converts a function of `n >= 2` arguments into `n` nested closures.
///
/// Two forms are accepted:
///
/// - `curry!(|a, b, ...| body)`: the arity is the number of parameters
/// - `curry!(path, n)`: any callable expression plus an integer literal arity
///
/// Captured arguments are cloned on each final call, so every argument but
/// the last must be `Clone`. The curried function and its partial
/// applications can be reused.
///
/// # Example
///
/// ```rust,ignore
/// use fpkit::curry;
///
/// fn scale(factor: i32, offset: i32, value: i32) -> i32 { value * factor + offset }
///
/// let scaled = curry!(scale, 3);
/// let double_plus_one = scaled(2)(1);
/// assert_eq!(double_plus_one(5), 11);
/// assert_eq!(double_plus_one(10), 21);
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}

/// Converts `n` nested single-argument closures into one closure of `n` arguments.
///
/// Written as `uncurry!(curried, n)`.
///
/// # Example
///
/// ```rust,ignore
/// use fpkit::uncurry;
///
/// let curried = |a: i32| move |b: i32| a - b;
/// let subtract = uncurry!(curried, 2);
/// assert_eq!(subtract(10, 4), 6);
/// ```
#[proc_macro]
pub fn uncurry(input: TokenStream) -> TokenStream {
    curry::uncurry_impl(input)
}
