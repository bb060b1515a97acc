//! Input parsing for the `SampleConfig` derive macro.
//!
//! Gathers the struct identifier, its fields and every attribute in one
//! pass so expansion can fail fast with spanned errors.

use syn::{Data, DeriveInput, Fields};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// Struct identifier, fields and parsed attributes of the derive input.
pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    pub struct_attrs: StructAttrs,
    /// Fields paired with their attributes, skipped fields included.
    pub fields: Vec<(syn::Field, FieldAttrs)>,
}

/// Gathers information from the user-provided struct.
///
/// Generic structs are rejected: descriptor tables are `static` items and
/// cannot depend on type parameters.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let ident = input.ident.clone();
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "SampleConfig cannot be derived for generic structs",
        ));
    }

    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().cloned().collect::<Vec<_>>(),
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "SampleConfig requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "SampleConfig can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let attrs = parse_field_attrs(&field.attrs)?;
        fields.push((field, attrs));
    }
    Ok(ParsedInput {
        ident,
        struct_attrs,
        fields,
    })
}
