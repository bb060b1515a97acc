//! Compile-time checks on derive input.
//!
//! Default literals on typed primitives must parse as that type, and list
//! defaults are checked item by item. Structures and maps take no default
//! because they never render a value line. Two fields sharing a key would
//! produce an ambiguous sample, so duplicates are rejected too.

use std::collections::HashSet;

use super::FieldPlan;
use super::parse::{FieldAttrs, ParsedInput, display_name};
use super::shape::{ScalarType, Shape, classify};

/// Classifies and checks every non-skipped field, in declaration order.
pub(crate) fn plan_fields(parsed: &ParsedInput) -> syn::Result<Vec<FieldPlan<'_>>> {
    let mut plans = Vec::with_capacity(parsed.fields.len());
    let mut seen = HashSet::new();

    for (field, attrs) in &parsed.fields {
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(
                field,
                "unnamed fields are not supported",
            ));
        };

        let name = display_name(field, attrs, parsed.struct_attrs.rename_all)?;
        if !seen.insert(name.clone()) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("duplicate sample key '{name}'"),
            ));
        }

        let shape = classify(&field.ty, attrs.scalar);
        check_default(ident, attrs, shape)?;
        plans.push(FieldPlan {
            ident,
            name,
            shape,
            attrs,
        });
    }
    Ok(plans)
}

fn check_default(ident: &syn::Ident, attrs: &FieldAttrs, shape: Shape<'_>) -> syn::Result<()> {
    let Some(default) = attrs.default.as_deref() else {
        return Ok(());
    };
    let problem = match shape {
        Shape::Primitive { scalar, .. } => scalar_mismatch(scalar, default)
            .map(|expected| format!("default '{default}' is not {expected}")),
        Shape::List { scalar, .. } => default.split(',').find_map(|item| {
            scalar_mismatch(scalar, item.trim())
                .map(|expected| format!("default item '{}' is not {expected}", item.trim()))
        }),
        Shape::Nested { .. } | Shape::Map { .. } => {
            Some(String::from("default is not supported on structures or maps"))
        }
        Shape::Indirect | Shape::Unsupported => None,
    };
    problem.map_or(Ok(()), |message| {
        Err(syn::Error::new_spanned(ident, message))
    })
}

/// Describes the expected literal when `text` does not parse as `scalar`.
fn scalar_mismatch(scalar: ScalarType, text: &str) -> Option<String> {
    let valid = match scalar {
        ScalarType::Integer { bits, signed } => integer_fits(text, bits, signed),
        ScalarType::Float { bits: 32 } => text.parse::<f32>().is_ok_and(f32::is_finite),
        ScalarType::Float { .. } => text.parse::<f64>().is_ok_and(f64::is_finite),
        ScalarType::Bool => text.parse::<bool>().is_ok(),
        ScalarType::Char => text.chars().count() == 1,
        ScalarType::Text | ScalarType::Custom => true,
    };
    if valid {
        return None;
    }
    Some(match scalar {
        ScalarType::Integer { bits, signed: true } => {
            let (min, max) = signed_range(bits);
            format!("an integer in {min}..={max}")
        }
        ScalarType::Integer {
            bits,
            signed: false,
        } => format!("an unsigned integer in 0..={}", unsigned_max(bits)),
        ScalarType::Float { bits } => format!("a finite {bits}-bit number"),
        ScalarType::Bool => String::from("`true` or `false`"),
        ScalarType::Char => String::from("a single character"),
        ScalarType::Text | ScalarType::Custom => String::from("text"),
    })
}

fn integer_fits(text: &str, bits: u32, signed: bool) -> bool {
    if signed {
        let (min, max) = signed_range(bits);
        text.parse::<i128>()
            .is_ok_and(|value| (min..=max).contains(&value))
    } else {
        text.parse::<u128>()
            .is_ok_and(|value| value <= unsigned_max(bits))
    }
}

const fn signed_range(bits: u32) -> (i128, i128) {
    let shift = 128 - bits;
    (i128::MIN >> shift, i128::MAX >> shift)
}

const fn unsigned_max(bits: u32) -> u128 {
    u128::MAX >> (128 - bits)
}

#[cfg(test)]
mod tests {
    //! Unit tests for default literal and key validation.

    use super::*;
    use crate::derive::parse::parse_input;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;
    use syn::{DeriveInput, parse_quote};

    fn plan_error(input: &DeriveInput) -> Result<String> {
        let parsed = parse_input(input).map_err(|err| anyhow!(err))?;
        match plan_fields(&parsed) {
            Ok(_) => Err(anyhow!("expected validation to fail")),
            Err(err) => Ok(err.to_string()),
        }
    }

    #[rstest]
    #[case::unsigned(ScalarType::Integer { bits: 16, signed: false }, "8080")]
    #[case::signed(ScalarType::Integer { bits: 32, signed: true }, "-3")]
    #[case::byte_max(ScalarType::Integer { bits: 8, signed: false }, "255")]
    #[case::signed_byte_min(ScalarType::Integer { bits: 8, signed: true }, "-128")]
    #[case::wide(ScalarType::Integer { bits: 128, signed: false }, "340282366920938463463374607431768211455")]
    #[case::float(ScalarType::Float { bits: 64 }, "0.5")]
    #[case::narrow_float(ScalarType::Float { bits: 32 }, "1.5e38")]
    #[case::boolean(ScalarType::Bool, "true")]
    #[case::character(ScalarType::Char, "x")]
    #[case::text(ScalarType::Text, "")]
    #[case::custom(ScalarType::Custom, "127.0.0.1")]
    fn accepts_matching_literals(#[case] scalar: ScalarType, #[case] text: &str) {
        assert_eq!(scalar_mismatch(scalar, text), None);
    }

    #[rstest]
    #[case::negative_unsigned(ScalarType::Integer { bits: 32, signed: false }, "-1")]
    #[case::word_as_integer(ScalarType::Integer { bits: 32, signed: true }, "many")]
    #[case::byte_overflow(ScalarType::Integer { bits: 8, signed: false }, "300")]
    #[case::signed_byte_underflow(ScalarType::Integer { bits: 8, signed: true }, "-200")]
    #[case::signed_byte_overflow(ScalarType::Integer { bits: 8, signed: true }, "128")]
    #[case::float_word(ScalarType::Float { bits: 64 }, "fast")]
    #[case::narrow_float_overflow(ScalarType::Float { bits: 32 }, "1e39")]
    #[case::yes(ScalarType::Bool, "yes")]
    #[case::two_chars(ScalarType::Char, "ab")]
    fn rejects_mismatched_literals(#[case] scalar: ScalarType, #[case] text: &str) {
        assert!(scalar_mismatch(scalar, text).is_some());
    }

    #[test]
    fn rejects_bad_integer_default() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[sample(default = "eighty")]
                port: u16,
            }
        };
        let message = plan_error(&input)?;
        ensure!(
            message.contains("is not an unsigned integer"),
            "unexpected error: {message}"
        );
        Ok(())
    }

    #[test]
    fn rejects_defaults_outside_the_field_width() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[sample(default = 300)]
                level: u8,
                #[sample(default = "-200")]
                delta: i8,
            }
        };
        let message = plan_error(&input)?;
        ensure!(
            message.contains("default '300' is not an unsigned integer in 0..=255"),
            "unexpected error: {message}"
        );
        Ok(())
    }

    #[test]
    fn rejects_signed_default_below_the_field_range() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[sample(default = "-200")]
                delta: i8,
            }
        };
        let message = plan_error(&input)?;
        ensure!(
            message.contains("is not an integer in -128..=127"),
            "unexpected error: {message}"
        );
        Ok(())
    }

    #[test]
    fn rejects_list_item_wider_than_the_element() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[sample(default = "80, 70000")]
                ports: Vec<u16>,
            }
        };
        let message = plan_error(&input)?;
        ensure!(message.contains("'70000'"), "unexpected error: {message}");
        Ok(())
    }

    #[test]
    fn rejects_bad_list_item() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[sample(default = "1, two, 3")]
                retries: Vec<u8>,
            }
        };
        let message = plan_error(&input)?;
        ensure!(message.contains("'two'"), "unexpected error: {message}");
        Ok(())
    }

    #[test]
    fn rejects_default_on_nested_structure() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[sample(default = "x")]
                database: Database,
            }
        };
        let message = plan_error(&input)?;
        ensure!(
            message.contains("not supported on structures"),
            "unexpected error: {message}"
        );
        Ok(())
    }

    #[test]
    fn rejects_duplicate_keys() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[sample(name = "port")]
                listen: u16,
                port: u16,
            }
        };
        let message = plan_error(&input)?;
        ensure!(
            message.contains("duplicate sample key 'port'"),
            "unexpected error: {message}"
        );
        Ok(())
    }

    #[test]
    fn skipped_fields_are_not_planned() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[sample(skip)]
                handle: Box<Inner>,
                #[sample(default = "1, 2")]
                levels: Vec<u8>,
            }
        };
        let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
        let plans = plan_fields(&parsed).map_err(|err| anyhow!(err))?;
        let names: Vec<&str> = plans.iter().map(|plan| plan.name.as_str()).collect();
        ensure!(names == ["levels"], "unexpected plans {names:?}");
        Ok(())
    }
}
