//! Attribute parsing for the `SampleConfig` derive macro.

use syn::meta::ParseNestedMeta;
use syn::parenthesized;
use syn::{Attribute, Token};

mod input;
mod literals;
mod rename;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{ParsedInput, parse_input};
use literals::{default_literal, lit_str, required_flag};
pub(crate) use rename::{RenameRule, display_name, serde_rename_all};
pub(crate) use type_utils::{
    btree_map_inner, hash_map_inner, is_indirection, last_segment_ident, option_inner, vec_inner,
};

/// Container-level `#[sample(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Rule applied to identifiers without an explicit name.
    pub rename_all: Option<RenameRule>,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[sample(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `genconfig::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(SampleConfig)]`.
///
/// - `name` overrides the key written to the sample.
/// - `default` supplies the literal emitted when no live value applies.
/// - `comment` is appended after the value.
/// - `required` set to `false` appends `(optional)`.
/// - `scalar` forces a custom type to render as a leaf via `Display`.
/// - `skip` omits the field entirely.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub name: Option<String>,
    pub default: Option<String>,
    pub comment: Option<String>,
    pub required: Option<bool>,
    pub scalar: bool,
    pub skip: bool,
}

impl FieldAttrs {
    /// Whether the field is required; absence of the attribute means yes.
    pub(crate) fn is_required(&self) -> bool {
        self.required.unwrap_or(true)
    }
}

/// Iterate all `#[sample(...)]` attributes once and apply a callback.
fn parse_sample<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("sample")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Rejects a key that is not part of the `#[sample(...)]` vocabulary.
fn unknown_key(meta: &ParseNestedMeta, expected: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| String::from("<path>"), ToString::to_string);
    meta.error(format!("unknown sample attribute '{key}'; expected one of {expected}"))
}

/// Accepts both `flag` and `flag = <bool>`.
fn parse_flag(meta: &ParseNestedMeta) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        Ok(meta.value()?.parse::<syn::LitBool>()?.value)
    } else {
        Ok(true)
    }
}

/// Extracts `#[sample(...)]` metadata applied to a struct.
///
/// `#[sample(rename_all)]` takes precedence over `#[serde(rename_all)]`.
/// Unknown keys are rejected so typos surface at compile time.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_sample(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("rename_all") => {
                let value = lit_str(meta, "rename_all")?;
                out.rename_all = Some(RenameRule::parse(&value)?);
                Ok(())
            }
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            _ => Err(unknown_key(meta, "`rename_all` or `crate`")),
        }
    })?;
    if out.rename_all.is_none() {
        out.rename_all = serde_rename_all(attrs)?;
    }
    Ok(out)
}

/// Applies a recognised field attribute, returning `false` if unknown.
fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<bool> {
    let Some(ident) = meta.path.get_ident() else {
        return Ok(false);
    };
    match ident.to_string().as_str() {
        "name" => {
            let s = lit_str(meta, "name")?;
            if s.value().is_empty() {
                return Err(syn::Error::new(s.span(), "name must not be empty"));
            }
            out.name = Some(s.value());
        }
        "default" => out.default = Some(default_literal(meta)?),
        "comment" => out.comment = Some(lit_str(meta, "comment")?.value()),
        "required" => out.required = Some(required_flag(meta)?),
        "scalar" => out.scalar = parse_flag(meta)?,
        "skip" => out.skip = parse_flag(meta)?,
        _ => return Ok(false),
    }
    Ok(true)
}

/// Parses field-level `#[sample(...)]` attributes.
///
/// Recognised keys are `name`, `default`, `comment`, `required`, `scalar`
/// and `skip`. Unknown keys are rejected.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_sample(attrs, |meta| {
        if apply_field_attr(meta, &mut out)? {
            return Ok(());
        }
        Err(unknown_key(
            meta,
            "`name`, `default`, `comment`, `required`, `scalar` or `skip`",
        ))
    })?;
    Ok(out)
}

