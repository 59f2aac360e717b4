//! Attribute parsing for the Context derive macro.
//!
//! This module parses the `#[context(...)]` field attributes.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Lit, Meta, Result, Token,
};

/// Field-level attributes from `#[context(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextAttr {
    /// Exclude this field from lookups.
    pub skip: bool,
    /// Custom lookup name (default: field name).
    pub rename: Option<String>,
    /// Render through `ToString` rather than `Value::from`.
    pub display: bool,
}

impl Parse for ContextAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ContextAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => attr.skip = true,
                Meta::Path(p) if p.is_ident("display") => attr.display = true,

                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        let name = s.value();
                        if name.is_empty() {
                            return Err(Error::new(s.span(), "rename must not be empty"));
                        }
                        attr.rename = Some(name);
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown context attribute. Expected: skip, display, or rename = \"...\"",
                    ));
                }
            }
        }

        if attr.skip && (attr.display || attr.rename.is_some()) {
            return Err(Error::new(
                input.span(),
                "skip cannot be combined with display or rename",
            ));
        }

        Ok(attr)
    }
}

/// Extract `#[context(...)]` attributes from a field's attributes.
pub fn parse_context_attrs(attrs: &[Attribute]) -> Result<ContextAttr> {
    for attr in attrs {
        if attr.path().is_ident("context") {
            return attr.parse_args::<ContextAttr>();
        }
    }
    Ok(ContextAttr::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_context(tokens: &str) -> Result<ContextAttr> {
        syn::parse_str::<ContextAttr>(tokens)
    }

    #[test]
    fn test_context_empty() {
        let attr = parse_context("").unwrap();
        assert_eq!(attr, ContextAttr::default());
    }

    #[test]
    fn test_context_skip() {
        let attr = parse_context("skip").unwrap();
        assert!(attr.skip);
        assert!(!attr.display);
    }

    #[test]
    fn test_context_display() {
        let attr = parse_context("display").unwrap();
        assert!(attr.display);
    }

    #[test]
    fn test_context_rename() {
        let attr = parse_context(r#"rename = "views""#).unwrap();
        assert_eq!(attr.rename, Some("views".to_string()));
    }

    #[test]
    fn test_context_display_with_rename() {
        let attr = parse_context(r#"display, rename = "when""#).unwrap();
        assert!(attr.display);
        assert_eq!(attr.rename, Some("when".to_string()));
    }

    #[test]
    fn test_context_rename_requires_string() {
        let result = parse_context("rename = 3");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("rename must be a string literal"));
    }

    #[test]
    fn test_context_rename_not_empty() {
        assert!(parse_context(r#"rename = """#).is_err());
    }

    #[test]
    fn test_context_unknown() {
        let result = parse_context("flatten");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown context attribute"));
    }

    #[test]
    fn test_context_skip_conflicts() {
        assert!(parse_context("skip, display").is_err());
        assert!(parse_context(r#"skip, rename = "x""#).is_err());
    }
}
