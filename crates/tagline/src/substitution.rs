//! Substitutions: what fills each gap between two fragments.
//!
//! A substitution is either a plain [`Value`] (rendered, never called), a
//! function of the context (called once per render), a nested [`Template`]
//! rendered against the same context, or absent (renders nothing).

use std::convert::Infallible;
use std::fmt;

use crate::context::Context;
use crate::template::Template;
use crate::value::Value;

/// Boxed function computing a substitution from the context.
pub type ComputeFn<'a, C, E> = Box<dyn Fn(&C) -> Result<Value, E> + 'a>;

/// Boxes a closure with its signature pinned, so parameter and return types
/// are deduced from the bound rather than from the call site.
pub(crate) fn boxed<'a, C, E, F>(f: F) -> ComputeFn<'a, C, E>
where
    C: ?Sized,
    F: Fn(&C) -> Result<Value, E> + 'a,
{
    Box::new(f)
}

/// One gap in a tagged template.
///
/// `C` is the context type handed to computed substitutions and `E` the
/// error type they may raise. Infallible substitutions use the default
/// `E = Infallible`.
///
/// # Example
///
/// ```
/// use tagline::{interpolate, Substitution};
///
/// struct Post { title: String }
///
/// let subs = [
///     Substitution::computed(|p: &Post| p.title.clone()),
///     Substitution::literal(42),
///     Substitution::absent(),
/// ];
/// let post = Post { title: "hi".into() };
///
/// let out = interpolate(&["<", "|", "|", ">"], &subs, &post).unwrap();
/// assert_eq!(out, "<hi|42|>");
/// ```
pub enum Substitution<'a, C: ?Sized, E = Infallible> {
    /// A plain value, rendered through its string form.
    Literal(Value),
    /// A function of the context, invoked on every render.
    Computed(ComputeFn<'a, C, E>),
    /// A template rendered with the same context.
    Nested(Template<'a, C, E>),
    /// Nothing; renders as the empty string.
    Absent,
}

impl<'a, C: ?Sized> Substitution<'a, C> {
    /// Creates a literal substitution.
    pub fn literal(value: impl Into<Value>) -> Self {
        Substitution::Literal(value.into())
    }

    /// Creates a substitution computed from the context.
    pub fn computed<F, R>(f: F) -> Self
    where
        F: Fn(&C) -> R + 'a,
        R: Into<Value>,
    {
        Substitution::Computed(boxed(move |ctx| Ok(f(ctx).into())))
    }

    /// Creates a substitution that renders a nested template.
    pub fn nested(template: Template<'a, C>) -> Self {
        Substitution::Nested(template)
    }

    /// Creates an absent substitution.
    pub fn absent() -> Self {
        Substitution::Absent
    }

    /// Converts an infallible substitution for use in a template whose other
    /// substitutions can fail with `E`.
    pub fn fallible<E>(self) -> Substitution<'a, C, E>
    where
        C: 'a,
    {
        match self {
            Substitution::Literal(value) => Substitution::Literal(value),
            Substitution::Computed(f) => {
                Substitution::Computed(boxed(move |ctx: &C| {
                    f(ctx).map_err(|never| match never {})
                }))
            }
            Substitution::Nested(template) => Substitution::Nested(template.fallible()),
            Substitution::Absent => Substitution::Absent,
        }
    }
}

impl<C: Context + ?Sized> Substitution<'_, C> {
    /// Creates a substitution that looks up a named field on the context.
    ///
    /// Missing fields render as the empty string.
    pub fn field(name: impl Into<String>) -> Self {
        let name = name.into();
        Substitution::Computed(boxed(move |ctx: &C| Ok(ctx.field(&name))))
    }
}

impl<'a, C: ?Sized, E> Substitution<'a, C, E> {
    /// Creates a substitution computed from the context that may fail.
    ///
    /// The error is returned from rendering unchanged.
    pub fn try_computed<F, R>(f: F) -> Self
    where
        F: Fn(&C) -> Result<R, E> + 'a,
        R: Into<Value>,
    {
        Substitution::Computed(boxed(move |ctx| f(ctx).map(Into::into)))
    }

    /// Returns `true` if rendering this substitution calls a function.
    pub fn is_computed(&self) -> bool {
        matches!(self, Substitution::Computed(_))
    }

    /// Returns `true` if this substitution is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Substitution::Absent)
    }

    /// Appends the rendered substitution to `out`.
    ///
    /// On error `out` may hold a partial render; callers discard it.
    pub(crate) fn render_into(&self, context: &C, out: &mut String) -> Result<(), E> {
        match self {
            Substitution::Literal(value) => value.render_into(out),
            Substitution::Computed(f) => f(context)?.render_into(out),
            Substitution::Nested(template) => template.render_into(context, out)?,
            Substitution::Absent => {}
        }
        Ok(())
    }
}

impl<C: ?Sized, E> fmt::Debug for Substitution<'_, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Substitution::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Substitution::Computed(_) => f.write_str("Computed(..)"),
            Substitution::Nested(template) => f.debug_tuple("Nested").field(template).finish(),
            Substitution::Absent => f.write_str("Absent"),
        }
    }
}

impl<C: ?Sized, E, T: Into<Value>> From<Option<T>> for Substitution<'_, C, E> {
    /// `Some` becomes a literal, `None` becomes absent.
    fn from(value: Option<T>) -> Self {
        value.map_or(Substitution::Absent, |v| Substitution::Literal(v.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Boom;

    fn render<C: ?Sized, E>(sub: &Substitution<'_, C, E>, ctx: &C) -> Result<String, E> {
        let mut out = String::new();
        sub.render_into(ctx, &mut out)?;
        Ok(out)
    }

    #[test]
    fn literal_is_rendered_not_called() {
        let sub: Substitution<()> = Substitution::literal(42);
        assert!(!sub.is_computed());
        assert_eq!(render(&sub, &()).unwrap(), "42");
    }

    #[test]
    fn computed_receives_context() {
        let sub = Substitution::computed(|n: &i32| n * 2);
        assert!(sub.is_computed());
        assert_eq!(render(&sub, &21).unwrap(), "42");
    }

    #[test]
    fn absent_renders_empty() {
        let sub: Substitution<()> = Substitution::absent();
        assert!(sub.is_absent());
        assert_eq!(render(&sub, &()).unwrap(), "");
    }

    #[test]
    fn field_looks_up_context() {
        let ctx = json!({"title": "hello"});
        let present = Substitution::field("title");
        let missing = Substitution::field("body");
        assert_eq!(render(&present, &ctx).unwrap(), "hello");
        assert_eq!(render(&missing, &ctx).unwrap(), "");
    }

    #[test]
    fn try_computed_propagates_error() {
        let sub: Substitution<(), Boom> = Substitution::try_computed(|_: &()| Err::<i32, _>(Boom));
        assert_eq!(render(&sub, &()), Err(Boom));
    }

    #[test]
    fn fallible_keeps_behavior() {
        let sub: Substitution<i32, Boom> = Substitution::computed(|n: &i32| *n).fallible();
        assert_eq!(render(&sub, &7), Ok("7".to_string()));
    }

    #[test]
    fn option_conversion() {
        let some: Substitution<()> = Some("x").into();
        let none: Substitution<()> = None::<&str>.into();
        assert_eq!(render(&some, &()).unwrap(), "x");
        assert!(none.is_absent());
    }

    #[test]
    fn debug_hides_closures() {
        let sub = Substitution::computed(|_: &()| "x");
        assert_eq!(format!("{:?}", sub), "Computed(..)");
        let lit: Substitution<()> = Substitution::literal("x");
        assert_eq!(format!("{:?}", lit), r#"Literal(Text("x"))"#);
    }
}
