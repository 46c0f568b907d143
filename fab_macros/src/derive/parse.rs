//! Parsing utilities for the `Fabricate` derive macro.

use syn::punctuated::Punctuated;
use syn::{Attribute, Data, DeriveInput, Field, Fields, LitStr, Token};

#[derive(Default)]
pub(crate) struct StructAttrs {
    pub crate_path: Option<syn::Path>,
}

#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
}

/// Iterate all `#[fab(...)]` attributes once and apply a callback.
fn parse_fab_attrs<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta<'_>) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("fab")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

pub(crate) fn struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_fab_attrs(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let value: LitStr = meta.value()?.parse()?;
            out.crate_path = Some(value.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported fab struct attribute"))
        }
    })?;
    Ok(out)
}

pub(crate) fn field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_fab_attrs(attrs, |meta| {
        if meta.path.is_ident("skip") {
            out.skip = true;
            Ok(())
        } else {
            Err(meta.error("unsupported fab field attribute"))
        }
    })?;
    Ok(out)
}

/// Named fields of the derived struct.
pub(crate) fn named_fields(input: &DeriveInput) -> syn::Result<&Punctuated<Field, Token![,]>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Ok(&named.named),
            Fields::Unit => Err(syn::Error::new_spanned(
                &input.ident,
                "Fabricate requires named fields; unit structs have nothing to assign",
            )),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                data.struct_token,
                "Fabricate requires named fields",
            )),
        },
        Data::Enum(data) => Err(syn::Error::new_spanned(
            data.enum_token,
            "Fabricate can only be derived for structs",
        )),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "Fabricate can only be derived for structs",
        )),
    }
}
