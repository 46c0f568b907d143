//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[fab(crate = "...")]` attribute value into a
//! `TokenStream` that replaces the default `::fab` path in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the runtime crate path from the parsed struct attribute.
///
/// Defaults to `::fab` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::fab }, |path| quote! { #path })
}
