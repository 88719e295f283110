use super::FieldContext;
use crate::BuildError;
use proc_macro2::TokenStream;
use quote::quote;

/// `update_<f>(value) -> bool`
pub fn generate(cx: &FieldContext) -> Result<TokenStream, BuildError> {
    let FieldContext { member, ty, .. } = cx;
    let update = cx.method("update");

    let old = cx.display(&cx.field.ty, &quote!(&self.inner.#member))?;
    let new = cx.display(&cx.field.ty, &quote!(&value))?;
    let change = cx.change("Updated");
    let log = cx.log(&quote!(change));

    Ok(quote! {
        pub fn #update(&mut self, value: #ty) -> bool {
            if self.inner.#member == value {
                return false;
            }

            let change = #change
                .with_old_value(#old)
                .with_new_value(#new);
            self.inner.#member = value;
            #log

            true
        }
    })
}
