//! Error types for the tagline crate.

use thiserror::Error;

/// Errors that can occur while interpolating a template.
///
/// The type parameter `E` is the error type raised by computed
/// substitutions. Templates whose substitutions cannot fail use
/// [`std::convert::Infallible`], which makes the `Substitution` variant
/// uninhabited.
#[derive(Debug, Error)]
pub enum InterpolateError<E> {
    /// The fragment count does not exceed the substitution count by exactly one.
    #[error(
        "fragment count ({fragments}) must exceed substitution count ({substitutions}) by exactly one"
    )]
    LengthMismatch {
        fragments: usize,
        substitutions: usize,
    },

    /// A computed substitution raised an error. The error is passed through
    /// unchanged, including its `Display` and `source()`.
    #[error(transparent)]
    Substitution(E),
}

impl<E> InterpolateError<E> {
    /// Returns `true` if this is a `LengthMismatch` error.
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, InterpolateError::LengthMismatch { .. })
    }

    /// Extracts the error raised by a substitution, if that is what failed.
    pub fn into_substitution_error(self) -> Option<E> {
        match self {
            InterpolateError::Substitution(err) => Some(err),
            InterpolateError::LengthMismatch { .. } => None,
        }
    }
}

/// Errors produced when parsing `{name}` placeholders in a template source.
///
/// Offsets are byte offsets of the opening brace in the source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `{` was never closed.
    #[error("unclosed placeholder starting at byte {offset}")]
    Unclosed { offset: usize },

    /// A placeholder contained no field name, e.g. `{}` or `{  }`.
    #[error("empty placeholder at byte {offset}")]
    EmptyName { offset: usize },

    /// A `{` appeared inside a placeholder, e.g. `{a{b}`.
    #[error("unexpected '{{' inside placeholder at byte {offset}")]
    UnexpectedBrace { offset: usize },
}

/// Errors produced when building a context from serializable data.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The data could not be converted to a JSON value.
    #[error("context serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for interpolation.
pub type Result<T, E = std::convert::Infallible> = std::result::Result<T, InterpolateError<E>>;
