//! Derive macro implementation for structconfig

use proc_macro::TokenStream;
use proc_macro2::TokenStream as QuoteStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// `StructConfig` derive macro
///
/// Registers every field of the struct, in declaration order, with its name
/// and `env` tag, and generates read and write accessors for them.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[structconfig(prefix = "PREFIX_")]`: Add prefix to all tagged env var names
///
/// **Field-level**:
/// - `#[env = "NAME"]` / `#[env = "NAME,secret"]`: Raw tag
/// - `#[env(name = "NAME", secret)]`: Structured form of the same tag
///
/// Every field must be a `String`, `bool`, integer or float.
///
/// # Example
///
/// See the `structconfig` crate documentation for usage examples.
#[proc_macro_derive(StructConfig, attributes(env, structconfig))]
pub fn derive_struct_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<QuoteStream> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_input(input)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "StructConfig only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "StructConfig only supports structs",
            ));
        }
    };

    let mut schema = Vec::with_capacity(fields.len());
    let mut idents = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "field has no name"));
        };
        let attrs = FieldAttrs::from_field(field)?;

        let name = ident.unraw().to_string();
        let tag = attrs.tag.unwrap_or_default();

        schema.push(quote! {
            ::structconfig::FieldSchema { name: #name, tag: #tag }
        });
        idents.push(ident);
    }

    let prefix = struct_attrs.prefix;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::structconfig::StructConfig for #struct_name #type_generics #where_clause {
            const PREFIX: &'static str = #prefix;

            const FIELDS: &'static [::structconfig::FieldSchema] = &[
                #(#schema),*
            ];

            fn values(&self) -> ::std::vec::Vec<::structconfig::Value> {
                ::std::vec![
                    #(::structconfig::FieldType::value(&self.#idents)),*
                ]
            }

            fn slots(&mut self) -> ::std::vec::Vec<::structconfig::Slot<'_>> {
                ::std::vec![
                    #(::structconfig::FieldType::slot(&mut self.#idents)),*
                ]
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_expand_rejects_enum() {
        let input: DeriveInput = parse_quote! {
            enum Config { A, B }
        };

        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "StructConfig only supports structs");
    }

    #[test]
    fn test_expand_rejects_tuple_struct() {
        let input: DeriveInput = parse_quote! {
            struct Config(String, u16);
        };

        let err = expand(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "StructConfig only supports structs with named fields"
        );
    }

    #[test]
    fn test_expand_schema_in_declaration_order() {
        let input: DeriveInput = parse_quote! {
            #[structconfig(prefix = "APP_")]
            struct Config {
                #[env = "B_VALUE"]
                b: String,
                a: u16,
                #[env(name = "C_VALUE", secret)]
                r#c: bool,
            }
        };

        let tokens = expand(&input).unwrap().to_string();
        let b = tokens.find("\"B_VALUE\"").unwrap();
        let a = tokens.find("name : \"a\"").unwrap();
        let c = tokens.find("\"C_VALUE,secret\"").unwrap();
        assert!(b < a && a < c);
        assert!(tokens.contains("name : \"c\""));
        assert!(tokens.contains("\"APP_\""));
    }

    #[test]
    fn test_expand_propagates_attribute_errors() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[env(from_file)]
                secret: String,
            }
        };

        assert!(expand(&input).is_err());
    }
}
