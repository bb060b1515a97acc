//! Tests for literal parsing helpers.

use super::super::literals::literal_text;
use super::super::*;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{Attribute, Expr, parse_quote};

#[rstest]
#[case::string(parse_quote!("info"), "info")]
#[case::integer(parse_quote!(8080), "8080")]
#[case::suffixed(parse_quote!(30u64), "30")]
#[case::negative(parse_quote!(-5), "-5")]
#[case::float(parse_quote!(0.25), "0.25")]
#[case::negative_float(parse_quote!(-1.5f32), "-1.5")]
#[case::boolean(parse_quote!(false), "false")]
#[case::character(parse_quote!('x'), "x")]
fn literal_text_normalises_literals(#[case] expr: Expr, #[case] expected: &str) {
    assert_eq!(literal_text(&expr).as_deref(), Some(expected));
}

#[rstest]
#[case::path(parse_quote!(DEFAULT_PORT))]
#[case::call(parse_quote!(default_port()))]
#[case::negated_string(parse_quote!(-"five"))]
fn literal_text_rejects_expressions(#[case] expr: Expr) {
    assert_eq!(literal_text(&expr), None);
}

fn first_field_attrs(attr: &Attribute) -> Result<FieldAttrs> {
    parse_field_attrs(std::slice::from_ref(attr)).map_err(|err| anyhow!(err))
}

#[rstest]
#[case::bool_false(parse_quote!(#[sample(required = false)]), false)]
#[case::bool_true(parse_quote!(#[sample(required = true)]), true)]
#[case::string_false(parse_quote!(#[sample(required = "false")]), false)]
#[case::string_other(parse_quote!(#[sample(required = "no")]), true)]
fn required_accepts_bools_and_strings(#[case] attr: Attribute, #[case] expected: bool) -> Result<()> {
    let attrs = first_field_attrs(&attr)?;
    ensure!(
        attrs.is_required() == expected,
        "expected required = {expected}"
    );
    Ok(())
}

#[test]
fn required_rejects_numbers() {
    let attr: Attribute = parse_quote!(#[sample(required = 1)]);
    assert!(parse_field_attrs(std::slice::from_ref(&attr)).is_err());
}

#[test]
fn comment_must_be_a_string() -> Result<()> {
    let attr: Attribute = parse_quote!(#[sample(comment = 5)]);
    let Err(err) = parse_field_attrs(std::slice::from_ref(&attr)) else {
        return Err(anyhow!("expected a numeric comment to be rejected"));
    };
    ensure!(
        err.to_string().contains("comment must be a string"),
        "unexpected error: {err}"
    );
    Ok(())
}
