//! `#[derive(Lenses)]`: one `{field}_lens()` constructor per named field.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, FieldsNamed, parse_macro_input};

pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = named_fields(&input)
        .map(|fields| {
            let constructors = fields.named.iter().map(lens_constructor);
            let name = &input.ident;
            let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#constructors)*
                }
            }
        })
        .unwrap_or_else(syn::Error::into_compile_error);

    TokenStream::from(expanded)
}

fn named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "Lenses needs named fields; tuple structs are not supported",
            )),
            Fields::Unit => Err(syn::Error::new_spanned(
                &input.ident,
                "Lenses needs at least one named field",
            )),
        },
        Data::Enum(_) | Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs",
        )),
    }
}

/// The lens constructor inherits the field's visibility.
fn lens_constructor(field: &Field) -> TokenStream2 {
    let Some(field_name) = field.ident.as_ref() else {
        return syn::Error::new_spanned(field, "expected a named field").into_compile_error();
    };
    let field_type = &field.ty;
    let visibility = &field.vis;
    let method_name = format_ident!("{}_lens", field_name);
    let documentation = format!("Returns a lens focusing on the `{field_name}` field.");

    quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        #visibility fn #method_name() -> impl ::fpkit::optics::Lens<Self, #field_type> + Clone {
            ::fpkit::optics::FunctionLens::new(
                |source: &Self| &source.#field_name,
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn tuple_struct_is_rejected() {
        let input: DeriveInput = syn::parse_quote! { struct Pair(u8, u8); };
        let error = named_fields(&input).unwrap_err();
        assert!(error.to_string().contains("tuple structs"));
    }

    #[rstest]
    fn enum_is_rejected() {
        let input: DeriveInput = syn::parse_quote! { enum Toggle { On, Off } };
        assert!(named_fields(&input).is_err());
    }

    #[rstest]
    fn constructor_keeps_field_visibility() {
        let field: Field = syn::parse_quote! { pub(crate) retries: u8 };
        let generated = lens_constructor(&field).to_string();
        assert!(generated.contains("fn retries_lens"));
        assert!(generated.contains("Returns a lens focusing on the `retries` field."));
        assert!(generated.contains("crate"));
    }
}
