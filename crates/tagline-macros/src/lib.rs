//! Proc macros for Tagline.
//!
//! # Available Macros
//!
//! - [`Context`] - Generate named-field lookup for template contexts
//!
//! The derive is re-exported by the `tagline` crate when its `macros`
//! feature is enabled (the default), so most users never depend on this
//! crate directly.

mod context;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Context` trait for template contexts.
///
/// This macro generates an implementation of `tagline::Context`, so
/// `{name}` placeholders and `Substitution::field` lookups can read the
/// struct's fields by name.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `skip` | Exclude this field from lookups |
/// | `rename = "..."` | Look the field up under a custom name |
/// | `display` | Render through `ToString` instead of `Value::from` |
///
/// Fields without `display` must be `Clone` with `Value: From<FieldType>`,
/// which covers strings, numbers, booleans and `Option`s of those.
///
/// # Generated Code
///
/// The macro generates:
///
/// 1. Field name constants (e.g., `Post::TITLE`, `Post::VIEW_COUNT`)
/// 2. Implementation of `Context::field()`
///
/// # Example
///
/// ```ignore
/// use tagline::{Context, Template};
///
/// #[derive(Context)]
/// struct Post {
///     title: String,
///     #[context(rename = "views")]
///     view_count: u32,
///     #[context(skip)]
///     draft: bool,
/// }
///
/// let template = Template::parse("{title} ({views})").unwrap();
/// let post = Post { title: "hello".into(), view_count: 3, draft: true };
/// assert_eq!(template.render(&post).unwrap(), "hello (3)");
/// assert_eq!(Post::VIEWS, "views");
/// ```
#[proc_macro_derive(Context, attributes(context))]
pub fn context_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    context::context_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
