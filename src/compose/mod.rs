//! Function composition utilities.
//!
//! - [`identity`], [`constant`], [`flip`]: small combinators
//! - [`pipe!`](crate::pipe): apply functions to a value, left to right
//! - [`compose!`](crate::compose): build a function, right to left
//! - `curry!` / `uncurry!` (feature `derive`): convert between multi-argument
//!   and nested single-argument closures, for any arity
//!
//! # Examples
//!
//! ```
//! use fpkit::{compose, pipe};
//!
//! let trim = |s: &'static str| s.trim();
//! let shout = |s: &str| s.to_uppercase();
//!
//! assert_eq!(pipe!("  hi ", trim, shout), "HI");
//! assert_eq!(compose!(shout, trim)("  hi "), "HI");
//! ```

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};
