//! Procedural macros for `genconfig`.
//!
//! The [`SampleConfig`](macro@SampleConfig) derive turns `#[sample(...)]`
//! field annotations into a static descriptor table and a field lookup, so
//! sample files are rendered without runtime reflection.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `genconfig::SampleConfig`.
///
/// Field attributes:
///
/// - `name = "..."` sets the key written to the sample. Without it the
///   field's `#[serde(rename)]`, the container `rename_all` rule, or the
///   field identifier is used.
/// - `default = ...` takes a string, integer, float or boolean literal.
/// - `comment = "..."` is appended after the value.
/// - `required = false` marks the field `(optional)`.
/// - `scalar` renders a custom `Display` type as a plain value.
/// - `skip` leaves the field out of the sample.
///
/// Container attributes: `rename_all = "..."` (serde rule names) and
/// `crate = "..."` for an aliased `genconfig` dependency.
///
/// `Option` wraps leaves, nested structures, lists and maps alike. An unset
/// leaf renders an empty value, an unset structure or list renders its
/// defaults, and an unset map renders only its header. Pointer types, tuples,
/// arrays and `Option<Option<_>>` are not described: pointers abort the
/// render and the rest are left out of the sample.
#[proc_macro_derive(SampleConfig, attributes(sample))]
pub fn derive_sample_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
