//! Typed field lookup on the context object.
//!
//! Substitution closures usually receive a concrete record type and read its
//! fields directly. When a template refers to fields *by name* (see
//! [`Substitution::field`](crate::Substitution::field) and
//! [`Template::parse`](crate::Template::parse)), the context must implement
//! [`Context`]. Unknown names yield [`Value::None`], which renders empty.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::Serialize;

use crate::error::ContextError;
use crate::value::Value;

/// Trait for types that can serve as a named-field context.
///
/// This trait is typically derived with `#[derive(Context)]` (enabled by the
/// `macros` feature), but can also be implemented manually.
///
/// # Manual Implementation
///
/// ```
/// use tagline::{Context, Value};
///
/// struct Post {
///     title: String,
///     views: u32,
/// }
///
/// impl Context for Post {
///     fn field(&self, name: &str) -> Value {
///         match name {
///             "title" => Value::from(&self.title),
///             "views" => Value::from(self.views),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let post = Post { title: "hello".into(), views: 3 };
/// assert_eq!(post.field("views").to_string(), "3");
/// assert!(post.field("missing").is_none());
/// ```
pub trait Context {
    /// Returns the value of a named field, or [`Value::None`] if there is no
    /// such field.
    fn field(&self, name: &str) -> Value;
}

impl<T: Context + ?Sized> Context for &T {
    fn field(&self, name: &str) -> Value {
        (**self).field(name)
    }
}

impl<T: Context + ?Sized> Context for Box<T> {
    fn field(&self, name: &str) -> Value {
        (**self).field(name)
    }
}

/// The empty context: every lookup is missing.
impl Context for () {
    fn field(&self, _name: &str) -> Value {
        Value::None
    }
}

impl<V, S> Context for HashMap<String, V, S>
where
    V: Clone + Into<Value>,
    S: BuildHasher,
{
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().map_or(Value::None, Into::into)
    }
}

impl<V> Context for BTreeMap<String, V>
where
    V: Clone + Into<Value>,
{
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().map_or(Value::None, Into::into)
    }
}

/// Looks up dotted paths such as `user.name` or `items.0`.
///
/// A name that matches a top-level key exactly wins over path resolution, so
/// keys containing dots stay reachable.
impl Context for serde_json::Value {
    fn field(&self, name: &str) -> Value {
        if let Some(exact) = self.as_object().and_then(|map| map.get(name)) {
            return Value::from(exact);
        }
        resolve_path(self, name).map_or(Value::None, Value::from)
    }
}

/// Resolves a dotted path in a JSON value.
///
/// Supports:
/// - Simple keys: `name`
/// - Nested objects: `user.profile.name`
/// - Array indices: `items.0` or `items.0.name`
fn resolve_path<'a>(value: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    let mut current = value;

    for part in path.split('.') {
        current = match current {
            serde_json::Value::Object(map) => map.get(part)?,
            serde_json::Value::Array(arr) => {
                let index: usize = part.parse().ok()?;
                arr.get(index)?
            }
            _ => return None,
        };
    }

    Some(current)
}

/// Serializes any data into a JSON context.
///
/// ```
/// use serde::Serialize;
/// use tagline::{context::to_context, Context};
///
/// #[derive(Serialize)]
/// struct Props { color: &'static str, size: u8 }
///
/// let ctx = to_context(&Props { color: "blue", size: 2 }).unwrap();
/// assert_eq!(ctx.field("color").to_string(), "blue");
/// ```
pub fn to_context<T: Serialize + ?Sized>(data: &T) -> Result<serde_json::Value, ContextError> {
    Ok(serde_json::to_value(data)?)
}
