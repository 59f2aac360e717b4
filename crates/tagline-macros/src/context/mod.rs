//! Implementation of the `#[derive(Context)]` macro.
//!
//! This module generates named-field lookup and field name constants from
//! struct definitions.

mod attrs;
mod derive;

pub use derive::context_derive_impl;
