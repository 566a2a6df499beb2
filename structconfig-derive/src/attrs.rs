//! Attribute parsing for `#[env ...]` and `#[structconfig(...)]` annotations.
//!
//! Both field tag forms are lowered to the raw tag text (`NAME[,secret]`) that
//! the runtime parses, so the two spellings behave identically.

use syn::{DeriveInput, Expr, ExprLit, Field, Lit, Meta};

/// Marker that flags a field as secret in the raw tag text.
const SECRET: &str = "secret";

/// Parsed `#[env ...]` attribute of a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw tag text. `None` for untagged fields.
    pub tag: Option<String>,
}

impl FieldAttrs {
    /// Extract the `env` tag from a struct field.
    ///
    /// Accepts `#[env = "NAME,secret"]` or `#[env(name = "NAME", secret)]`.
    /// Attributes with other paths are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }
            if attrs.tag.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate env attribute: a field has at most one tag",
                ));
            }

            let tag = match &attr.meta {
                // #[env = "NAME,secret"]
                Meta::NameValue(nv) => match &nv.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(s), ..
                    }) => s.value(),
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "expected a string literal, e.g. #[env = \"NAME\"]",
                        ))
                    }
                },

                // #[env(name = "NAME", secret)]
                Meta::List(_) => {
                    let mut name = String::new();
                    let mut secret = false;
                    attr.parse_nested_meta(|meta| {
                        if meta.path.is_ident("name") {
                            let value = meta.value()?;
                            let lit: syn::LitStr = value.parse()?;
                            name = lit.value();
                            return Ok(());
                        }

                        if meta.path.is_ident(SECRET) {
                            secret = true;
                            return Ok(());
                        }

                        Err(meta.error("unsupported env attribute, expected `name` or `secret`"))
                    })?;
                    if secret {
                        format!("{name},{SECRET}")
                    } else {
                        name
                    }
                }

                Meta::Path(_) => {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "expected #[env = \"NAME\"] or #[env(name = \"NAME\")]",
                    ))
                }
            };
            attrs.tag = Some(tag);
        }

        Ok(attrs)
    }
}

/// Parsed `#[structconfig(...)]` attributes of the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prefix prepended to every tagged variable name.
    pub prefix: String,
}

impl StructAttrs {
    /// Extract struct-level options.
    pub fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &input.attrs {
            if !attr.path().is_ident("structconfig") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    let value = meta.value()?;
                    let lit: syn::LitStr = value.parse()?;
                    attrs.prefix = lit.value();
                    return Ok(());
                }

                Err(meta.error("unsupported structconfig attribute, expected `prefix`"))
            })?;
        }

        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_raw_tag() {
        let field: Field = parse_quote! {
            #[env = "STRING_VALUE"]
            pub string_value: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, Some("STRING_VALUE".to_string()));
    }

    #[test]
    fn test_parse_raw_tag_kept_verbatim() {
        let field: Field = parse_quote! {
            #[env = "SECRET_STRING_VALUE,secret,extra"]
            pub secret_string_value: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, Some("SECRET_STRING_VALUE,secret,extra".to_string()));
    }

    #[test]
    fn test_parse_structured_name() {
        let field: Field = parse_quote! {
            #[env(name = "REDIS_URL")]
            pub cache_url: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, Some("REDIS_URL".to_string()));
    }

    #[test]
    fn test_parse_structured_secret() {
        let field: Field = parse_quote! {
            #[env(name = "API_KEY", secret)]
            pub api_key: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, Some("API_KEY,secret".to_string()));
    }

    #[test]
    fn test_parse_untagged() {
        let field: Field = parse_quote! {
            #[doc = "not ours"]
            pub int32_value: i32
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, None);
    }

    #[test]
    fn test_parse_duplicate_rejected() {
        let field: Field = parse_quote! {
            #[env = "A"]
            #[env(name = "B")]
            pub value: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_parse_unknown_key_rejected() {
        let field: Field = parse_quote! {
            #[env(name = "A", from_file)]
            pub value: String
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("unsupported env attribute"));
    }

    #[test]
    fn test_parse_non_string_rejected() {
        let field: Field = parse_quote! {
            #[env = 42]
            pub value: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_parse_bare_path_rejected() {
        let field: Field = parse_quote! {
            #[env]
            pub value: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_parse_prefix() {
        let input: DeriveInput = parse_quote! {
            #[structconfig(prefix = "APP_")]
            struct Config {
                port: u16,
            }
        };

        let attrs = StructAttrs::from_input(&input).unwrap();
        assert_eq!(attrs.prefix, "APP_");
    }

    #[test]
    fn test_parse_no_prefix() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                port: u16,
            }
        };

        let attrs = StructAttrs::from_input(&input).unwrap();
        assert_eq!(attrs.prefix, "");
    }
}
