//! Runtime crate path used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the path generated code uses to reach the runtime crate.
///
/// Defaults to `genconfig`; `#[sample(crate = "...")]` substitutes an
/// aliased dependency name.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { genconfig }, |path| quote! { #path })
}
