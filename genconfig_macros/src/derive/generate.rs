//! Token generation for the `SampleConfig` implementation.
//!
//! The descriptor table is emitted as two `static` items so the schema is
//! built at compile time and shared by every render. `field_value` is a
//! single `match` on the field identifier.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use super::FieldPlan;
use super::shape::Shape;

/// Builds the `impl SampleConfig for #ident` block.
pub(crate) fn sample_config_impl(
    ident: &syn::Ident,
    plans: &[FieldPlan<'_>],
    krate: &TokenStream,
) -> TokenStream {
    let type_name = ident.to_string();
    let field_count = plans.len();
    let descriptors = plans.iter().map(|plan| descriptor_tokens(plan, krate));
    let arms = plans.iter().filter_map(|plan| value_arm(plan, krate));

    quote! {
        #[automatically_derived]
        impl #krate::SampleConfig for #ident {
            fn schema() -> &'static #krate::Schema {
                static FIELDS: [#krate::FieldDescriptor; #field_count] = [#(#descriptors),*];
                static SCHEMA: #krate::Schema = #krate::Schema::new(#type_name, &FIELDS);
                &SCHEMA
            }

            fn field_value(
                &self,
                ident: &str,
            ) -> ::core::option::Option<#krate::FieldValue<'_>> {
                match ident {
                    #(#arms,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

/// Lookup key shared by the descriptor and the `field_value` arm.
fn lookup_key(plan: &FieldPlan<'_>) -> String {
    plan.ident.unraw().to_string()
}

fn kind_tokens(shape: Shape<'_>, krate: &TokenStream) -> TokenStream {
    match shape {
        Shape::Primitive { .. } => quote! { #krate::FieldKind::Primitive },
        Shape::Nested { ty, .. } => {
            quote! { #krate::FieldKind::Nested(<#ty as #krate::SampleConfig>::schema) }
        }
        Shape::Map { value, .. } => {
            quote! { #krate::FieldKind::Map(<#value as #krate::SampleConfig>::schema) }
        }
        Shape::List { .. } => quote! { #krate::FieldKind::List },
        Shape::Indirect => quote! { #krate::FieldKind::Indirect },
        Shape::Unsupported => quote! { #krate::FieldKind::Unsupported },
    }
}

fn descriptor_tokens(plan: &FieldPlan<'_>, krate: &TokenStream) -> TokenStream {
    let key = lookup_key(plan);
    let name = &plan.name;
    let kind = kind_tokens(plan.shape, krate);
    let default = plan
        .attrs
        .default
        .as_ref()
        .map(|text| quote! { .with_default(#text) });
    let comment = plan
        .attrs
        .comment
        .as_ref()
        .map(|text| quote! { .with_comment(#text) });
    let optional = (!plan.attrs.is_required()).then(|| quote! { .optional() });

    quote! {
        #krate::FieldDescriptor::new(#key, #name, #kind) #default #comment #optional
    }
}

/// Match arm resolving the live value; `None` for shapes without one.
///
/// `Option` fields yield no value when unset, so the renderer falls back to
/// the descriptor defaults.
fn value_arm(plan: &FieldPlan<'_>, krate: &TokenStream) -> Option<TokenStream> {
    let key = lookup_key(plan);
    let field = plan.ident;
    let (constructor, optional) = match plan.shape {
        Shape::Primitive { optional, .. } => (quote! { scalar }, optional),
        Shape::Nested { optional, .. } => (quote! { Struct }, optional),
        Shape::List { optional, .. } => (quote! { list }, optional),
        Shape::Map {
            ordered: true,
            optional,
            ..
        } => (quote! { map }, optional),
        Shape::Map {
            ordered: false,
            optional,
            ..
        } => (quote! { unordered_map }, optional),
        Shape::Indirect | Shape::Unsupported => return None,
    };
    let value = if optional {
        quote! {
            self.#field
                .as_ref()
                .map(|value| #krate::FieldValue::#constructor(value))
        }
    } else {
        quote! { ::core::option::Option::Some(#krate::FieldValue::#constructor(&self.#field)) }
    };
    Some(quote! { #key => #value })
}
