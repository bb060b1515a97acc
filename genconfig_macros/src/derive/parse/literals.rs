//! Literal parsing helpers for derive attributes.

use syn::meta::ParseNestedMeta;
use syn::{Expr, ExprLit, ExprUnary, Lit, LitStr, UnOp};

/// Parses a literal from a field attribute using `extractor`.
fn parse_lit<T, F>(meta: &ParseNestedMeta, key: &str, extractor: F) -> Result<T, syn::Error>
where
    F: FnOnce(Lit) -> Option<T>,
{
    let literal = meta.value()?.parse::<Lit>()?;
    let span = literal.span();
    extractor(literal).ok_or_else(|| {
        let type_name = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("literal")
            .to_lowercase();
        let display_type = match type_name.as_str() {
            "litstr" => "string",
            other => other,
        };
        syn::Error::new(span, format!("{key} must be a {display_type}"))
    })
}

/// Parses a string literal from a field attribute.
pub(crate) fn lit_str(meta: &ParseNestedMeta, key: &str) -> Result<LitStr, syn::Error> {
    parse_lit(meta, key, |lit| match lit {
        Lit::Str(s) => Some(s),
        _ => None,
    })
}

/// Parses `required = <bool>` or `required = "<text>"`.
///
/// Only `false` (as a boolean or the exact string `"false"`) marks a field
/// optional; any other string keeps it required.
pub(crate) fn required_flag(meta: &ParseNestedMeta) -> Result<bool, syn::Error> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Bool(flag) => Ok(flag.value),
        Lit::Str(text) => Ok(text.value() != "false"),
        other => Err(syn::Error::new(
            other.span(),
            "required must be a bool or a string",
        )),
    }
}

/// Parses a default literal and returns its text.
///
/// Strings are taken as-is; integer, float and boolean literals (including
/// negated numbers) are stored in their base-10 form without suffixes.
pub(crate) fn default_literal(meta: &ParseNestedMeta) -> Result<String, syn::Error> {
    let expr = meta.value()?.parse::<Expr>()?;
    literal_text(&expr).ok_or_else(|| {
        syn::Error::new_spanned(
            &expr,
            "default must be a string, integer, float or bool literal",
        )
    })
}

/// Text form of a literal default expression, if it is one.
pub(crate) fn literal_text(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Str(s) => Some(s.value()),
            Lit::Int(i) => Some(i.base10_digits().to_owned()),
            Lit::Float(f) => Some(f.base10_digits().to_owned()),
            Lit::Bool(b) => Some(b.value.to_string()),
            Lit::Char(c) => Some(c.value().to_string()),
            _ => None,
        },
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            Expr::Lit(ExprLit {
                lit: Lit::Int(i), ..
            }) => Some(format!("-{}", i.base10_digits())),
            Expr::Lit(ExprLit {
                lit: Lit::Float(f), ..
            }) => Some(format!("-{}", f.base10_digits())),
            _ => None,
        },
        _ => None,
    }
}
