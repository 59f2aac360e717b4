//! Tagline - Tagged template interpolation with typed substitutions.
//!
//! A tagged template is a list of literal fragments with a substitution in
//! every gap between two fragments. Each substitution is either a plain value
//! or a function of one shared context object. Interpolation concatenates the
//! fragments with the rendered substitutions into a single string.
//!
//! # Quick Start
//!
//! ```rust
//! use tagline::{interpolate, Substitution};
//!
//! struct Post {
//!     title: String,
//!     body: String,
//! }
//!
//! let post = Post {
//!     title: "안녕하세요".into(),
//!     body: "내용은 내용내용 입니다.".into(),
//! };
//!
//! let out = interpolate(
//!     &["\n  제목: ", "\n  내용: ", "\n"],
//!     &[
//!         Substitution::computed(|p: &Post| p.title.clone()),
//!         Substitution::computed(|p: &Post| p.body.clone()),
//!     ],
//!     &post,
//! )
//! .unwrap();
//!
//! assert_eq!(out, "\n  제목: 안녕하세요\n  내용: 내용은 내용내용 입니다.\n");
//! ```
//!
//! # Substitutions
//!
//! | Variant | Rendering |
//! |---------|-----------|
//! | `Literal` | The value's string form; never called |
//! | `Computed` | Called with the context, result rendered |
//! | `Nested` | A [`Template`] rendered with the same context |
//! | `Absent` | Empty string |
//!
//! # Templates
//!
//! [`Template`] keeps fragments and substitutions together and guarantees
//! there is always one more fragment than substitutions. Build one with
//! [`Template::builder`] or parse `{name}` placeholders with
//! [`Template::parse`] against any [`Context`].
//!
//! # Features
//!
//! - `macros` (default): `#[derive(Context)]` for structs with named fields.

pub mod context;
mod error;
mod interpolate;
mod substitution;
mod template;
mod value;

// Re-export public API
pub use context::Context;
pub use error::{ContextError, InterpolateError, ParseError, Result};
pub use interpolate::{interpolate, interpolate_sparse};
pub use substitution::{ComputeFn, Substitution};
pub use template::{Template, TemplateBuilder};
pub use value::{Number, Value};

#[cfg(feature = "macros")]
pub use tagline_macros::Context;
