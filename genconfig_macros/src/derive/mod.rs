//! Expansion of `#[derive(SampleConfig)]`.
//!
//! Parsing, classification and validation run before any tokens are
//! generated, so a malformed struct produces a single spanned error and no
//! partial implementation.

mod crate_path;
mod generate;
pub(crate) mod parse;
mod shape;
mod validate;

use proc_macro2::TokenStream;
use syn::DeriveInput;

use parse::FieldAttrs;
use shape::Shape;

/// Everything generation needs to know about one rendered field.
pub(crate) struct FieldPlan<'a> {
    pub ident: &'a syn::Ident,
    /// Key written to the sample.
    pub name: String,
    pub shape: Shape<'a>,
    pub attrs: &'a FieldAttrs,
}

/// Expands the derive for `input` into a `SampleConfig` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let plans = validate::plan_fields(&parsed)?;
    let krate = crate_path::resolve(parsed.struct_attrs.crate_path.as_ref());
    Ok(generate::sample_config_impl(&parsed.ident, &plans, &krate))
}
