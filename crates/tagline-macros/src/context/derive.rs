//! Implementation of the `#[derive(Context)]` macro.
//!
//! This macro generates an implementation of the `Context` trait and
//! field name constants for placeholder templates.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_context_attrs;

/// Main implementation of the Context derive macro.
pub fn context_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Context can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Context can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    let mut seen_constants: Vec<String> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_context_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let lookup_name = attrs
            .rename
            .unwrap_or_else(|| field_name.to_string().trim_start_matches("r#").to_string());

        if seen.contains(&lookup_name) {
            return Err(Error::new(
                field.span(),
                format!("duplicate context field name '{}'", lookup_name),
            ));
        }
        seen.push(lookup_name.clone());

        // Renamed lookups may not form a valid identifier; those get no constant.
        let const_name = to_screaming_snake_case(&lookup_name);
        if syn::parse_str::<syn::Ident>(&const_name).is_ok() {
            if seen_constants.contains(&const_name) {
                return Err(Error::new(
                    field.span(),
                    format!(
                        "context field name '{}' produces constant {} already defined by another field",
                        lookup_name, const_name
                    ),
                ));
            }
            seen_constants.push(const_name.clone());
            let const_name = format_ident!("{}", const_name);
            field_constants.push(quote! {
                /// Field name constant for placeholder templates.
                pub const #const_name: &'static str = #lookup_name;
            });
        }

        let value_expr = if attrs.display {
            quote! {
                ::tagline::Value::Text(::std::string::ToString::to_string(&self.#field_name))
            }
        } else {
            quote! {
                ::tagline::Value::from(::std::clone::Clone::clone(&self.#field_name))
            }
        };

        field_matches.push(quote! {
            #lookup_name => #value_expr,
        });
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::tagline::Context for #struct_name #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::tagline::Value {
                match name {
                    #(#field_matches)*
                    _ => ::tagline::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == '.' || c == ' ' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(src: &str) -> Result<String> {
        let input: DeriveInput = syn::parse_str(src)?;
        context_derive_impl(input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn test_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("title"), "TITLE");
        assert_eq!(to_screaming_snake_case("view_count"), "VIEW_COUNT");
        assert_eq!(to_screaming_snake_case("viewCount"), "VIEW_COUNT");
        assert_eq!(to_screaming_snake_case("font-size"), "FONT_SIZE");
        assert_eq!(to_screaming_snake_case("user.name"), "USER_NAME");
    }

    #[test]
    fn test_expands_match_arms() {
        let out = expand(
            r#"struct Post { title: String, #[context(rename = "views")] count: u32 }"#,
        )
        .unwrap();
        assert!(out.contains("\"title\""));
        assert!(out.contains("\"views\""));
        assert!(out.contains("const VIEWS"));
        assert!(!out.contains("\"count\""));
    }

    #[test]
    fn test_skip_omits_field() {
        let out = expand("struct Post { title: String, #[context(skip)] secret: String }").unwrap();
        assert!(!out.contains("secret"));
    }

    #[test]
    fn test_display_uses_to_string() {
        let out = expand("struct Props { #[context(display)] size: Size }").unwrap();
        assert!(out.contains("ToString"));
    }

    #[test]
    fn test_rejects_colliding_constants() {
        let err = expand(
            r#"struct Profile { user_name: String, #[context(rename = "user.name")] other: String }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("constant USER_NAME already defined"));
    }

    #[test]
    fn test_invalid_constant_name_is_skipped() {
        let out = expand(r#"struct Props { #[context(rename = "2x")] scale: u8 }"#).unwrap();
        assert!(out.contains("\"2x\""));
        assert!(!out.contains("const"));
    }

    #[test]
    fn test_rejects_enums_and_tuples() {
        let err = expand("enum Mode { A, B }").unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));

        let err = expand("struct Pair(u8, u8);").unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = expand(r#"struct Post { a: u8, #[context(rename = "a")] b: u8 }"#).unwrap_err();
        assert!(err.to_string().contains("duplicate context field name"));
    }
}
