//! Type introspection helpers.
//!
//! These utilities perform shallow inspection of `syn::Type` values to
//! recognise wrapper types such as `Option<T>`, collection containers such
//! as `Vec<T>` and `BTreeMap<K, V>`, and pointer-like indirections.

use syn::{GenericArgument, PathArguments, Type};

/// Smart pointers and borrow wrappers treated as indirections.
const INDIRECTION_WRAPPERS: &[&str] = &[
    "Box", "Rc", "Arc", "Weak", "Cell", "RefCell", "Cow", "NonNull",
];

/// Extract the first type argument from a `PathArguments` container.
fn extract_first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    angle_args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

/// Returns the final path segment identifier of `ty`, if it is a path.
pub(crate) fn last_segment_ident(ty: &Type) -> Option<String> {
    let Type::Path(p) = ty else {
        return None;
    };
    p.path.segments.last().map(|seg| seg.ident.to_string())
}

/// Returns the generic parameter if `ty` is the provided wrapper.
///
/// The check is shallow: it inspects only the outermost path and supports
/// fully-qualified forms like `std::option::Option<T>`. It is not recursive.
fn type_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    if last.ident != wrapper {
        return None;
    }
    extract_first_type_argument(&last.arguments)
}

/// Returns the inner type if `ty` is `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Option")
}

/// Extracts the element type `T` if `ty` is `Vec<T>`.
pub(crate) fn vec_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Vec")
}

/// Extracts the key and value types if `ty` is `BTreeMap<K, V>`.
pub(crate) fn btree_map_inner(ty: &Type) -> Option<(&Type, &Type)> {
    map_inner(ty, "BTreeMap")
}

/// Extracts the key and value types if `ty` is `HashMap<K, V>`.
pub(crate) fn hash_map_inner(ty: &Type) -> Option<(&Type, &Type)> {
    map_inner(ty, "HashMap")
}

/// Shared helper to extract key/value types from map-like containers.
fn map_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<(&'a Type, &'a Type)> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    if last.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    let mut type_args = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    });
    Some((type_args.next()?, type_args.next()?))
}

/// Returns `true` for references, raw pointers and smart pointers.
pub(crate) fn is_indirection(ty: &Type) -> bool {
    match ty {
        Type::Reference(_) | Type::Ptr(_) => true,
        Type::Group(group) => is_indirection(&group.elem),
        Type::Paren(paren) => is_indirection(&paren.elem),
        Type::Path(_) => last_segment_ident(ty)
            .is_some_and(|ident| INDIRECTION_WRAPPERS.contains(&ident.as_str())),
        _ => false,
    }
}
