//! The interpolation pass.
//!
//! Both functions walk fragments left to right, appending each fragment and
//! then the rendered substitution that follows it. They never mutate their
//! inputs and keep no state between calls.

use crate::error::InterpolateError;
use crate::substitution::Substitution;

/// Interpolates `fragments` and `substitutions` against `context`.
///
/// There must be exactly one more fragment than substitutions; otherwise the
/// call fails with [`InterpolateError::LengthMismatch`] before any
/// substitution runs. Computed substitutions are called with `context`,
/// literals are rendered through their string form, and absent ones render
/// nothing. The first substitution error aborts the call and is returned as
/// [`InterpolateError::Substitution`]; no partial string is produced.
///
/// # Example
///
/// ```
/// use tagline::{interpolate, Substitution};
///
/// let out = interpolate(&["a", "b"], &[Substitution::literal(42)], &()).unwrap();
/// assert_eq!(out, "a42b");
/// ```
pub fn interpolate<C, E, S>(
    fragments: &[S],
    substitutions: &[Substitution<'_, C, E>],
    context: &C,
) -> Result<String, InterpolateError<E>>
where
    C: ?Sized,
    S: AsRef<str>,
{
    if fragments.len() != substitutions.len() + 1 {
        return Err(InterpolateError::LengthMismatch {
            fragments: fragments.len(),
            substitutions: substitutions.len(),
        });
    }

    let mut out = String::with_capacity(fragments.iter().map(|f| f.as_ref().len()).sum());

    for (fragment, substitution) in fragments.iter().zip(substitutions) {
        out.push_str(fragment.as_ref());
        substitution
            .render_into(context, &mut out)
            .map_err(InterpolateError::Substitution)?;
    }

    if let Some(last) = fragments.last() {
        out.push_str(last.as_ref());
    }

    Ok(out)
}

/// Interpolates without checking lengths.
///
/// Every fragment is emitted, each followed by the substitution at the same
/// index when one exists. Missing substitutions render as nothing and
/// substitutions past the last fragment are never called. An empty fragment
/// list yields an empty string. Substitution errors are returned unchanged.
///
/// ```
/// use tagline::{interpolate_sparse, Substitution};
///
/// let subs: [Substitution<()>; 1] = [Substitution::literal(1)];
/// let out = interpolate_sparse(&["a", "b", "c"], &subs, &()).unwrap();
/// assert_eq!(out, "a1bc");
/// ```
pub fn interpolate_sparse<C, E, S>(
    fragments: &[S],
    substitutions: &[Substitution<'_, C, E>],
    context: &C,
) -> Result<String, E>
where
    C: ?Sized,
    S: AsRef<str>,
{
    let mut out = String::new();

    for (index, fragment) in fragments.iter().enumerate() {
        out.push_str(fragment.as_ref());
        if let Some(substitution) = substitutions.get(index) {
            substitution.render_into(context, &mut out)?;
        }
    }

    Ok(out)
}
