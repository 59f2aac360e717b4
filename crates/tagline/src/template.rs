//! Owned templates: fragments and substitutions kept together.
//!
//! A [`Template`] always holds exactly one more fragment than substitutions.
//! It is produced by [`TemplateBuilder`], by [`Template::from_parts`] (which
//! checks the count), or by [`Template::parse`] for `{name}` placeholder
//! sources.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;

use crate::context::Context;
use crate::error::{InterpolateError, ParseError};
use crate::interpolate::interpolate;
use crate::substitution::{boxed, Substitution};
use crate::value::Value;

/// A tagged template bound to a context type `C`.
///
/// # Example
///
/// ```
/// use tagline::Template;
///
/// struct Post { title: String, body: String }
///
/// let template = Template::builder()
///     .text("\n  제목: ")
///     .computed(|p: &Post| p.title.clone())
///     .text("\n  내용: ")
///     .computed(|p: &Post| p.body.clone())
///     .text("\n")
///     .build();
///
/// let post = Post {
///     title: "안녕하세요".into(),
///     body: "내용은 내용내용 입니다.".into(),
/// };
///
/// assert_eq!(
///     template.render(&post).unwrap(),
///     "\n  제목: 안녕하세요\n  내용: 내용은 내용내용 입니다.\n"
/// );
/// ```
pub struct Template<'a, C: ?Sized, E = Infallible> {
    fragments: Vec<Cow<'a, str>>,
    substitutions: Vec<Substitution<'a, C, E>>,
}

impl<'a, C: ?Sized> Template<'a, C> {
    /// Starts building an infallible template.
    pub fn builder() -> TemplateBuilder<'a, C> {
        TemplateBuilder::new()
    }

    /// Converts an infallible template for use where substitutions can fail
    /// with `E`.
    pub fn fallible<E>(self) -> Template<'a, C, E>
    where
        C: 'a,
    {
        Template {
            fragments: self.fragments,
            substitutions: self
                .substitutions
                .into_iter()
                .map(Substitution::fallible)
                .collect(),
        }
    }
}

impl<C: Context + ?Sized> Template<'static, C> {
    /// Parses a template with `{name}` placeholders.
    ///
    /// Each placeholder becomes a [`Substitution::field`] lookup; surrounding
    /// whitespace inside the braces is ignored and dotted names are passed to
    /// the context as-is. `{{` and `}}` produce literal braces, and a lone `}`
    /// is kept as text. A `{` inside a placeholder is rejected.
    ///
    /// ```
    /// use serde_json::json;
    /// use tagline::Template;
    ///
    /// let template = Template::parse("{user.name} has {{{ count }}} items").unwrap();
    /// let ctx = json!({"user": {"name": "kim"}, "count": 3});
    ///
    /// assert_eq!(template.render(&ctx).unwrap(), "kim has {3} items");
    /// ```
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut builder = TemplateBuilder::new();
        let mut text = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    text.push('{');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;

                    for (inner_offset, inner) in chars.by_ref() {
                        match inner {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => {
                                return Err(ParseError::UnexpectedBrace {
                                    offset: inner_offset,
                                })
                            }
                            _ => name.push(inner),
                        }
                    }

                    if !closed {
                        return Err(ParseError::Unclosed { offset });
                    }

                    let name = name.trim();
                    if name.is_empty() {
                        return Err(ParseError::EmptyName { offset });
                    }

                    builder = builder
                        .text(std::mem::take(&mut text))
                        .substitution(Substitution::field(name));
                }
                '}' => {
                    if matches!(chars.peek(), Some((_, '}'))) {
                        chars.next();
                    }
                    text.push('}');
                }
                _ => text.push(ch),
            }
        }

        Ok(builder.text(text).build())
    }
}

impl<'a, C: ?Sized, E> Template<'a, C, E> {
    /// Starts building a template whose substitutions may fail with `E`.
    pub fn try_builder() -> TemplateBuilder<'a, C, E> {
        TemplateBuilder::new()
    }

    /// Assembles a template from separate fragment and substitution lists.
    ///
    /// Fails with [`InterpolateError::LengthMismatch`] unless there is exactly
    /// one more fragment than substitutions.
    pub fn from_parts<S>(
        fragments: Vec<S>,
        substitutions: Vec<Substitution<'a, C, E>>,
    ) -> Result<Self, InterpolateError<E>>
    where
        S: Into<Cow<'a, str>>,
    {
        if fragments.len() != substitutions.len() + 1 {
            return Err(InterpolateError::LengthMismatch {
                fragments: fragments.len(),
                substitutions: substitutions.len(),
            });
        }

        Ok(Template {
            fragments: fragments.into_iter().map(Into::into).collect(),
            substitutions,
        })
    }

    /// Renders the template against a context.
    pub fn render(&self, context: &C) -> Result<String, InterpolateError<E>> {
        interpolate(self.fragments.as_slice(), self.substitutions.as_slice(), context)
    }

    /// Appends the rendered template to `out`.
    pub(crate) fn render_into(&self, context: &C, out: &mut String) -> Result<(), E> {
        for (fragment, substitution) in self.fragments.iter().zip(&self.substitutions) {
            out.push_str(fragment);
            substitution.render_into(context, out)?;
        }
        if let Some(last) = self.fragments.last() {
            out.push_str(last);
        }
        Ok(())
    }

    /// The literal fragments, one more than [`len`](Self::len).
    pub fn fragments(&self) -> &[Cow<'a, str>] {
        &self.fragments
    }

    /// The substitutions, in order.
    pub fn substitutions(&self) -> &[Substitution<'a, C, E>] {
        &self.substitutions
    }

    /// Number of substitutions.
    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    /// Returns `true` if the template has no substitutions.
    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }
}

impl<C: ?Sized, E> fmt::Debug for Template<'_, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("fragments", &self.fragments)
            .field("substitutions", &self.substitutions)
            .finish()
    }
}

/// Fluent builder for [`Template`].
///
/// Consecutive `text` calls join into one fragment and consecutive
/// substitutions are separated by an empty fragment, so the result always
/// has one more fragment than substitutions.
pub struct TemplateBuilder<'a, C: ?Sized, E = Infallible> {
    // Invariant: fragments.len() == substitutions.len() + 1
    fragments: Vec<Cow<'a, str>>,
    substitutions: Vec<Substitution<'a, C, E>>,
}

impl<'a, C: ?Sized, E> TemplateBuilder<'a, C, E> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        TemplateBuilder {
            fragments: vec![Cow::Borrowed("")],
            substitutions: Vec::new(),
        }
    }

    /// Appends literal text to the current fragment.
    pub fn text(mut self, text: impl Into<Cow<'a, str>>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        if let Some(last) = self.fragments.last_mut() {
            if last.is_empty() {
                *last = text;
            } else {
                last.to_mut().push_str(&text);
            }
        }
        self
    }

    /// Appends a substitution.
    pub fn substitution(mut self, substitution: Substitution<'a, C, E>) -> Self {
        self.substitutions.push(substitution);
        self.fragments.push(Cow::Borrowed(""));
        self
    }

    /// Appends a literal value.
    pub fn literal(self, value: impl Into<Value>) -> Self {
        self.substitution(Substitution::Literal(value.into()))
    }

    /// Appends a value computed from the context.
    pub fn computed<F, R>(self, f: F) -> Self
    where
        F: Fn(&C) -> R + 'a,
        R: Into<Value>,
    {
        self.substitution(Substitution::Computed(boxed(move |ctx| Ok(f(ctx).into()))))
    }

    /// Appends a value computed from the context that may fail with `E`.
    pub fn try_computed<F, R>(self, f: F) -> Self
    where
        F: Fn(&C) -> Result<R, E> + 'a,
        R: Into<Value>,
    {
        self.substitution(Substitution::try_computed(f))
    }

    /// Appends a nested template, rendered with the same context.
    pub fn nested(self, template: Template<'a, C, E>) -> Self {
        self.substitution(Substitution::Nested(template))
    }

    /// Appends an absent substitution.
    pub fn absent(self) -> Self {
        self.substitution(Substitution::Absent)
    }

    /// Finishes the template.
    pub fn build(self) -> Template<'a, C, E> {
        Template {
            fragments: self.fragments,
            substitutions: self.substitutions,
        }
    }
}

impl<'a, C: Context + ?Sized, E> TemplateBuilder<'a, C, E> {
    /// Appends a named field lookup on the context.
    pub fn field(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.substitution(Substitution::Computed(boxed(move |ctx: &C| {
            Ok(ctx.field(&name))
        })))
    }
}

impl<C: ?Sized, E> Default for TemplateBuilder<'_, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
