//! Code generation for `#[derive(Fabricate)]`.

mod crate_path;
mod parse;

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;
use syn::ext::IdentExt;

/// Expand the derive into an `impl Fabricate` block.
///
/// Each non-skipped field becomes one `match` arm keyed by the field name
/// (raw identifiers lose their `r#` prefix), converting the value through
/// `fab::factory::from_value`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let struct_attrs = parse::struct_attrs(&input.attrs)?;
    let krate = crate_path::resolve(struct_attrs.crate_path.as_ref());
    let fields = parse::named_fields(input)?;

    let mut arms = Vec::with_capacity(fields.len());
    for field in fields {
        if parse::field_attrs(&field.attrs)?.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let name = ident.unraw().to_string();
        arms.push(quote! {
            #name => {
                self.#ident = #krate::factory::from_value(
                    <Self as #krate::Fabricate>::target_name(),
                    attribute,
                    value,
                )?;
                ::core::result::Result::Ok(())
            }
        });
    }

    let ident = &input.ident;
    let target = ident.unraw().to_string();
    let value = if arms.is_empty() {
        quote! { _value }
    } else {
        quote! { value }
    };
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::Fabricate for #ident #ty_generics #where_clause {
            fn target_name() -> &'static str {
                #target
            }

            fn assign(
                &mut self,
                attribute: &str,
                #value: #krate::Value,
            ) -> #krate::FabResult<()> {
                match attribute {
                    #( #arms )*
                    _ => ::core::result::Result::Err(::std::sync::Arc::new(
                        #krate::FabError::unknown_attribute(
                            <Self as #krate::Fabricate>::target_name(),
                            attribute,
                        ),
                    )),
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    //! Unit tests for the generated `assign` arms.

    use super::*;
    use syn::parse_quote;

    fn expand_to_string(input: &DeriveInput) -> String {
        expand(input).expect("derive expands").to_string()
    }

    #[test]
    fn generates_one_arm_per_field() {
        let input: DeriveInput = parse_quote! {
            struct Dog { name: String, r#type: String, #[fab(skip)] secret: u8 }
        };
        let expanded = expand_to_string(&input);
        assert!(expanded.contains("\"name\" =>"));
        assert!(expanded.contains("\"type\" =>"));
        assert!(!expanded.contains("\"secret\""));
        assert!(expanded.contains(":: fab :: Fabricate for Dog"));
    }

    #[test]
    fn honours_crate_override() {
        let input: DeriveInput = parse_quote! {
            #[fab(crate = "fixtures")]
            struct Cat { name: String }
        };
        let expanded = expand_to_string(&input);
        assert!(expanded.contains("fixtures :: Fabricate for Cat"));
    }

    #[test]
    fn empty_structs_ignore_the_value() {
        let input: DeriveInput = parse_quote! {
            struct Nothing {}
        };
        assert!(expand_to_string(&input).contains("_value"));
    }
}
