//! Classification of field types into rendering shapes.

use syn::Type;

use super::parse::{
    btree_map_inner, hash_map_inner, is_indirection, last_segment_ident, option_inner, vec_inner,
};

/// Primitive leaf types, used to validate default literals.
///
/// Integer and float widths are kept so a default is checked against the
/// range of the field's own type. `usize` and `isize` count as 64 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScalarType {
    Integer { bits: u32, signed: bool },
    Float { bits: u32 },
    Bool,
    Char,
    Text,
    /// A `Display` type whose defaults are not checked.
    Custom,
}

impl ScalarType {
    fn of(ty: &Type) -> Option<Self> {
        let ident = last_segment_ident(ty)?;
        let scalar = match ident.as_str() {
            "u8" => Self::Integer { bits: 8, signed: false },
            "u16" => Self::Integer { bits: 16, signed: false },
            "u32" => Self::Integer { bits: 32, signed: false },
            "u64" | "usize" => Self::Integer { bits: 64, signed: false },
            "u128" => Self::Integer { bits: 128, signed: false },
            "i8" => Self::Integer { bits: 8, signed: true },
            "i16" => Self::Integer { bits: 16, signed: true },
            "i32" => Self::Integer { bits: 32, signed: true },
            "i64" | "isize" => Self::Integer { bits: 64, signed: true },
            "i128" => Self::Integer { bits: 128, signed: true },
            "f32" => Self::Float { bits: 32 },
            "f64" => Self::Float { bits: 64 },
            "bool" => Self::Bool,
            "char" => Self::Char,
            "String" | "str" => Self::Text,
            "IpAddr" | "Ipv4Addr" | "Ipv6Addr" | "SocketAddr" | "SocketAddrV4"
            | "SocketAddrV6" => Self::Custom,
            _ => return None,
        };
        Some(scalar)
    }
}

/// How a field is described and how its live value is looked up.
///
/// `optional` marks an `Option` wrapper: a `None` leaf has no value line and
/// a `None` structure or list renders from its defaults.
#[derive(Clone, Copy)]
pub(crate) enum Shape<'a> {
    /// A leaf.
    Primitive { scalar: ScalarType, optional: bool },
    /// A nested structure implementing `SampleConfig`.
    Nested { ty: &'a Type, optional: bool },
    /// A keyed collection; `ordered` is false for hash maps.
    Map {
        value: &'a Type,
        ordered: bool,
        optional: bool,
    },
    /// A list of `Display` elements.
    List { scalar: ScalarType, optional: bool },
    /// A pointer or smart pointer.
    Indirect,
    /// Tuples, arrays, function pointers and nested `Option`s.
    Unsupported,
}

impl Shape<'_> {
    const fn is_optional(self) -> bool {
        match self {
            Self::Primitive { optional, .. }
            | Self::Nested { optional, .. }
            | Self::Map { optional, .. }
            | Self::List { optional, .. } => optional,
            Self::Indirect | Self::Unsupported => false,
        }
    }

    /// The same shape behind an `Option`, if the renderer can express it.
    const fn into_optional(self) -> Self {
        if self.is_optional() {
            return Self::Unsupported;
        }
        match self {
            Self::Primitive { scalar, .. } => Self::Primitive {
                scalar,
                optional: true,
            },
            Self::Nested { ty, .. } => Self::Nested { ty, optional: true },
            Self::Map { value, ordered, .. } => Self::Map {
                value,
                ordered,
                optional: true,
            },
            Self::List { scalar, .. } => Self::List {
                scalar,
                optional: true,
            },
            other @ (Self::Indirect | Self::Unsupported) => other,
        }
    }
}

/// Classifies `ty`. `force_scalar` comes from `#[sample(scalar)]`.
pub(crate) fn classify(ty: &Type, force_scalar: bool) -> Shape<'_> {
    if is_indirection(ty) {
        return Shape::Indirect;
    }

    if let Some(inner) = option_inner(ty) {
        return classify(inner, force_scalar).into_optional();
    }

    if force_scalar {
        return Shape::Primitive {
            scalar: ScalarType::of(ty).unwrap_or(ScalarType::Custom),
            optional: false,
        };
    }

    if let Some(element) = vec_inner(ty) {
        if is_indirection(element) {
            return Shape::Indirect;
        }
        return Shape::List {
            scalar: ScalarType::of(element).unwrap_or(ScalarType::Custom),
            optional: false,
        };
    }

    let map = btree_map_inner(ty)
        .map(|(_, value)| (value, true))
        .or_else(|| hash_map_inner(ty).map(|(_, value)| (value, false)));
    if let Some((value, ordered)) = map {
        if is_indirection(value) {
            return Shape::Indirect;
        }
        return Shape::Map {
            value,
            ordered,
            optional: false,
        };
    }

    if let Some(scalar) = ScalarType::of(ty) {
        return Shape::Primitive {
            scalar,
            optional: false,
        };
    }

    match ty {
        Type::Path(_) => Shape::Nested {
            ty,
            optional: false,
        },
        Type::Group(group) => classify(&group.elem, false),
        Type::Paren(paren) => classify(&paren.elem, false),
        _ => Shape::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for field shape classification.

    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    #[case::string(parse_quote!(String), ScalarType::Text)]
    #[case::unsigned(parse_quote!(u16), ScalarType::Integer { bits: 16, signed: false })]
    #[case::signed(parse_quote!(std::primitive::i64), ScalarType::Integer { bits: 64, signed: true })]
    #[case::pointer_sized(parse_quote!(usize), ScalarType::Integer { bits: 64, signed: false })]
    #[case::float(parse_quote!(f64), ScalarType::Float { bits: 64 })]
    #[case::narrow_float(parse_quote!(f32), ScalarType::Float { bits: 32 })]
    #[case::boolean(parse_quote!(bool), ScalarType::Bool)]
    #[case::address(parse_quote!(std::net::IpAddr), ScalarType::Custom)]
    fn primitives_are_leaves(#[case] ty: Type, #[case] expected: ScalarType) {
        let Shape::Primitive { scalar, optional } = classify(&ty, false) else {
            panic!("expected a primitive leaf");
        };
        assert_eq!(scalar, expected);
        assert!(!optional);
    }

    #[rstest]
    #[case(parse_quote!(Option<u32>))]
    #[case(parse_quote!(core::option::Option<String>))]
    fn optional_primitives_are_optional_leaves(#[case] ty: Type) {
        assert!(matches!(
            classify(&ty, false),
            Shape::Primitive { optional: true, .. }
        ));
    }

    #[rstest]
    #[case::reference(parse_quote!(&'static str))]
    #[case::raw(parse_quote!(*const u8))]
    #[case::boxed(parse_quote!(Box<Inner>))]
    #[case::shared(parse_quote!(std::sync::Arc<Inner>))]
    #[case::optional_box(parse_quote!(Option<Box<Inner>>))]
    #[case::vec_of_rc(parse_quote!(Vec<std::rc::Rc<str>>))]
    #[case::map_of_box(parse_quote!(BTreeMap<String, Box<Inner>>))]
    fn pointers_are_indirect(#[case] ty: Type) {
        assert!(matches!(classify(&ty, false), Shape::Indirect));
    }

    #[rstest]
    #[case::tuple(parse_quote!((u8, u8)))]
    #[case::array(parse_quote!([u8; 4]))]
    #[case::function(parse_quote!(fn() -> u8))]
    #[case::optional_tuple(parse_quote!(Option<(u8, u8)>))]
    #[case::double_option(parse_quote!(Option<Option<Inner>>))]
    fn other_types_are_unsupported(#[case] ty: Type) {
        assert!(matches!(classify(&ty, false), Shape::Unsupported));
    }

    #[test]
    fn unknown_paths_are_nested() {
        let ty: Type = parse_quote!(crate::config::Database);
        assert!(matches!(
            classify(&ty, false),
            Shape::Nested {
                optional: false,
                ..
            }
        ));
    }

    #[rstest]
    #[case::structure(parse_quote!(Option<Database>))]
    #[case::list(parse_quote!(Option<Vec<String>>))]
    #[case::map(parse_quote!(Option<BTreeMap<String, Database>>))]
    fn optional_containers_keep_their_shape(#[case] ty: Type) {
        let shape = classify(&ty, false);
        assert!(shape.is_optional());
        assert!(matches!(
            shape,
            Shape::Nested { .. } | Shape::List { .. } | Shape::Map { .. }
        ));
    }

    #[test]
    fn maps_record_ordering() {
        let btree: Type = parse_quote!(std::collections::BTreeMap<String, Inner>);
        let hash: Type = parse_quote!(HashMap<String, Inner>);
        assert!(matches!(
            classify(&btree, false),
            Shape::Map { ordered: true, .. }
        ));
        assert!(matches!(
            classify(&hash, false),
            Shape::Map { ordered: false, .. }
        ));
    }

    #[test]
    fn vectors_are_lists() {
        let ty: Type = parse_quote!(Vec<u8>);
        assert!(matches!(
            classify(&ty, false),
            Shape::List {
                scalar: ScalarType::Integer {
                    bits: 8,
                    signed: false
                },
                optional: false
            }
        ));
    }

    #[test]
    fn scalar_flag_forces_a_leaf() {
        let ty: Type = parse_quote!(LogLevel);
        assert!(matches!(
            classify(&ty, true),
            Shape::Primitive {
                scalar: ScalarType::Custom,
                optional: false
            }
        ));
    }
}
