//! Display-name resolution.
//!
//! Sample keys should match the keys the application actually reads, so the
//! derive honours `#[serde(rename = "...")]` and `#[serde(rename_all = "...")]`
//! when no explicit `#[sample(name = "...")]` is given.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Field, LitStr, Token};

use super::FieldAttrs;

/// Case conventions accepted by `rename_all`, named as serde names them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

const RULE_NAMES: [(&str, RenameRule); 8] = [
    ("lowercase", RenameRule::Lower),
    ("UPPERCASE", RenameRule::Upper),
    ("PascalCase", RenameRule::Pascal),
    ("camelCase", RenameRule::Camel),
    ("snake_case", RenameRule::Snake),
    ("SCREAMING_SNAKE_CASE", RenameRule::ScreamingSnake),
    ("kebab-case", RenameRule::Kebab),
    ("SCREAMING-KEBAB-CASE", RenameRule::ScreamingKebab),
];

impl RenameRule {
    pub(crate) fn parse(value: &LitStr) -> syn::Result<Self> {
        let wanted = value.value();
        RULE_NAMES
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|&(_, rule)| rule)
            .ok_or_else(|| {
                let known: Vec<String> =
                    RULE_NAMES.iter().map(|(name, _)| format!("\"{name}\"")).collect();
                syn::Error::new(
                    value.span(),
                    format!(
                        "unknown rename_all rule '{wanted}'; use one of {}",
                        known.join(", ")
                    ),
                )
            })
    }

    pub(crate) fn apply(self, ident: &str) -> String {
        match self {
            Self::Lower => ident.to_ascii_lowercase(),
            Self::Upper => ident.to_ascii_uppercase(),
            Self::Pascal => ident.to_upper_camel_case(),
            Self::Camel => ident.to_lower_camel_case(),
            Self::Snake => ident.to_snake_case(),
            Self::ScreamingSnake => ident.to_shouty_snake_case(),
            Self::Kebab => ident.to_kebab_case(),
            Self::ScreamingKebab => ident.to_shouty_kebab_case(),
        }
    }
}

/// Runs `on_key` for every key inside `#[serde(...)]` attributes.
///
/// Keys the callback does not consume must be passed to `discard_unknown`.
fn each_serde_key<F>(attrs: &[Attribute], mut on_key: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .try_for_each(|attr| attr.parse_nested_meta(|meta| on_key(&meta)))
}

/// The container's `#[serde(rename_all = "...")]` rule, if any.
pub(crate) fn serde_rename_all(attrs: &[Attribute]) -> syn::Result<Option<RenameRule>> {
    let mut rule = None;
    each_serde_key(attrs, |meta| {
        if meta.path.is_ident("rename_all") {
            let value: LitStr = meta.value()?.parse()?;
            rule = Some(RenameRule::parse(&value)?);
            Ok(())
        } else {
            super::discard_unknown(meta)
        }
    })?;
    Ok(rule)
}

/// The field's serialized name from `#[serde(rename = "...")]` or
/// `#[serde(rename(serialize = "..."))]`.
pub(crate) fn serde_field_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut renamed = None;
    each_serde_key(attrs, |meta| {
        if !meta.path.is_ident("rename") {
            return super::discard_unknown(meta);
        }
        if meta.input.peek(Token![=]) {
            renamed = Some(meta.value()?.parse::<LitStr>()?.value());
        } else if meta.input.peek(syn::token::Paren) {
            meta.parse_nested_meta(|direction| {
                if direction.path.is_ident("serialize") {
                    renamed = Some(direction.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else {
                    super::discard_unknown(&direction)
                }
            })?;
        }
        Ok(())
    })?;
    Ok(renamed)
}

/// Computes the key written to the sample for `field`.
///
/// Precedence: `#[sample(name)]`, `#[serde(rename)]`, the container rule
/// applied to the identifier, then the bare identifier.
pub(crate) fn display_name(
    field: &Field,
    attrs: &FieldAttrs,
    rename_all: Option<RenameRule>,
) -> syn::Result<String> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(
            field,
            "unnamed fields are not supported",
        ));
    };
    if let Some(name) = &attrs.name {
        return Ok(name.clone());
    }
    if let Some(rename) = serde_field_rename(&field.attrs)? {
        return Ok(rename);
    }
    let field_name = ident.unraw().to_string();
    Ok(rename_all.map_or_else(|| field_name.clone(), |rule| rule.apply(&field_name)))
}
