//! Procedural macros for `fab`.
//!
//! `#[derive(Fabricate)]` implements `fab::Fabricate` for structs with named
//! fields. Each field becomes an attribute a factory rule can target; the
//! produced JSON value is converted into the field's type with `serde`.
//!
//! Supported attributes:
//!
//! - `#[fab(crate = "path")]` on the struct overrides the path used to reach
//!   the `fab` runtime (useful when the dependency is renamed).
//! - `#[fab(skip)]` on a field hides it from factories; assigning it reports
//!   an unknown attribute.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `fab::Fabricate`.
#[proc_macro_derive(Fabricate, attributes(fab))]
pub fn derive_fabricate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
