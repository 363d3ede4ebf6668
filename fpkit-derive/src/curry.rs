//! `curry!` and `uncurry!`.
//!
//! `curry!` accepts a closure (`curry!(|a, b, c| body)`) or a callable path
//! with its arity (`curry!(add, 3)`) and expands to nested single-argument
//! closures. Every captured argument is held in an `Rc`, so a curried
//! function and each partial application can be called any number of times;
//! the argument is cloned out when the final call is made.
//!
//! For `curry!(add, 3)` the expansion is:
//!
//! ```text
//! {
//!     let __fpkit_function = Rc::new(add);
//!     move |__fpkit_argument_0| {
//!         let __fpkit_function = Rc::clone(&__fpkit_function);
//!         let __fpkit_argument_0 = Rc::new(__fpkit_argument_0);
//!         move |__fpkit_argument_1| {
//!             let __fpkit_function = Rc::clone(&__fpkit_function);
//!             let __fpkit_argument_0 = Rc::clone(&__fpkit_argument_0);
//!             let __fpkit_argument_1 = Rc::new(__fpkit_argument_1);
//!             move |__fpkit_argument_2| __fpkit_function(
//!                 Rc::unwrap_or_clone(Rc::clone(&__fpkit_argument_0)),
//!                 Rc::unwrap_or_clone(Rc::clone(&__fpkit_argument_1)),
//!                 __fpkit_argument_2,
//!             )
//!         }
//!     }
//! }
//! ```
//!
//! `uncurry!(curried, 3)` goes the other way and expands to
//! `move |a0, a1, a2| curried(a0)(a1)(a2)`.

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::{Expr, ExprClosure, LitInt, Token, parse_macro_input};

const MINIMUM_ARITY: usize = 2;

/// Either a closure (arity taken from its parameters) or a path plus arity.
enum CurryInput {
    Closure(ExprClosure),
    Callable { function: Expr, arity: usize },
}

impl Parse for CurryInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let function: Expr = input.parse()?;

        if input.is_empty() {
            return match function {
                Expr::Closure(closure) => {
                    check_arity(closure.inputs.len(), Span::call_site())?;
                    Ok(Self::Closure(closure))
                }
                other => Err(syn::Error::new_spanned(
                    other,
                    "curry! needs an arity for anything but a closure: curry!(function, 2)",
                )),
            };
        }

        let arity = parse_arity(input)?;
        Ok(Self::Callable { function, arity })
    }
}

/// A curried callable and the number of arguments to uncurry.
struct UncurryInput {
    function: Expr,
    arity: usize,
}

impl Parse for UncurryInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let function: Expr = input.parse()?;
        if input.is_empty() {
            return Err(syn::Error::new_spanned(
                function,
                "uncurry! needs an arity: uncurry!(curried, 2)",
            ));
        }
        let arity = parse_arity(input)?;
        Ok(Self { function, arity })
    }
}

fn parse_arity(input: ParseStream) -> syn::Result<usize> {
    input.parse::<Token![,]>()?;
    let literal: LitInt = input.parse()?;
    let arity = literal.base10_parse::<usize>()?;
    check_arity(arity, literal.span())?;
    let _trailing: Option<Token![,]> = input.parse()?;
    Ok(arity)
}

fn check_arity(arity: usize, span: Span) -> syn::Result<()> {
    if arity < MINIMUM_ARITY {
        Err(syn::Error::new(
            span,
            "currying needs a function of at least 2 arguments",
        ))
    } else {
        Ok(())
    }
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    let expanded = match parse_macro_input!(input as CurryInput) {
        CurryInput::Closure(closure) => {
            let arity = closure.inputs.len();
            curried_closures(&quote! { #closure }, arity)
        }
        CurryInput::Callable { function, arity } => curried_closures(&quote! { #function }, arity),
    };
    TokenStream::from(expanded)
}

pub fn uncurry_impl(input: TokenStream) -> TokenStream {
    let UncurryInput { function, arity } = parse_macro_input!(input as UncurryInput);
    let arguments = argument_identifiers(arity);

    TokenStream::from(quote! {
        {
            let __fpkit_function = #function;
            move |#(#arguments),*| __fpkit_function #((#arguments))*
        }
    })
}

fn argument_identifiers(arity: usize) -> Vec<Ident> {
    (0..arity)
        .map(|index| format_ident!("__fpkit_argument_{}", index))
        .collect()
}

fn curried_closures(function: &TokenStream2, arity: usize) -> TokenStream2 {
    let arguments = argument_identifiers(arity);
    let Some((last, captured)) = arguments.split_last() else {
        return quote! { #function };
    };

    let mut body = quote! {
        move |#last| __fpkit_function(
            #(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#captured)),)*
            #last
        )
    };

    for (position, argument) in captured.iter().enumerate().rev() {
        let earlier = &captured[..position];
        body = quote! {
            move |#argument| {
                let __fpkit_function = ::std::rc::Rc::clone(&__fpkit_function);
                #(let #earlier = ::std::rc::Rc::clone(&#earlier);)*
                let #argument = ::std::rc::Rc::new(#argument);
                #body
            }
        };
    }

    quote! {
        {
            let __fpkit_function = ::std::rc::Rc::new(#function);
            #body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn closure_arity_comes_from_parameters() {
        let input: CurryInput = syn::parse_quote! { |a: i32, b: i32, c: i32| a + b + c };
        assert!(matches!(input, CurryInput::Closure(ref closure) if closure.inputs.len() == 3));
    }

    #[rstest]
    fn path_requires_arity() {
        let result = syn::parse2::<CurryInput>(quote! { add });
        assert!(result.is_err());
    }

    #[rstest]
    #[case(quote! { add, 1 })]
    #[case(quote! { |a: i32| a })]
    fn arity_below_two_is_rejected(#[case] tokens: TokenStream2) {
        assert!(syn::parse2::<CurryInput>(tokens).is_err());
    }

    #[rstest]
    fn uncurry_accepts_trailing_comma() {
        let input = syn::parse2::<UncurryInput>(quote! { curried, 3, }).map(|parsed| parsed.arity);
        assert_eq!(input.ok(), Some(3));
    }

    #[rstest]
    fn curried_expansion_nests_one_closure_per_argument() {
        let expanded = curried_closures(&quote! { add }, 3).to_string();
        assert_eq!(expanded.matches("move |").count(), 3);
        assert_eq!(expanded.matches("Rc :: new").count(), 3);
    }
}
