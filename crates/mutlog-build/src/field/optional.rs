use super::FieldContext;
use crate::BuildError;
use mutlog_schema::classify::RecordRef;
use proc_macro2::TokenStream;
use quote::quote;

/// `set_<f>(Option<T>) -> bool`, plus `mutate_<f>()` when `T` is a record.
pub fn generate(cx: &FieldContext, target: Option<&RecordRef>) -> Result<TokenStream, BuildError> {
    let FieldContext { member, ty, .. } = cx;
    let set = cx.method("set");

    let old = cx.display(&cx.field.ty, &quote!(&self.inner.#member))?;
    let new = cx.display(&cx.field.ty, &quote!(&value))?;
    let cleared = cx.change("Cleared");
    let replaced = cx.change("Set");
    let log = cx.log(&quote!(change));

    // records need not be comparable; only both-absent is a no-op for them
    let unchanged = if target.is_some() {
        quote!(self.inner.#member.is_none() && value.is_none())
    } else {
        quote!(self.inner.#member == value)
    };

    let mut tokens = quote! {
        pub fn #set(&mut self, value: #ty) -> bool {
            if #unchanged {
                return false;
            }

            let old = #old;
            let change = if value.is_none() {
                #cleared.with_old_value(old)
            } else {
                #replaced.with_old_value(old).with_new_value(#new)
            };
            self.inner.#member = value;
            #log

            true
        }
    };

    if let Some(target) = target {
        let mutate = cx.method("mutate");
        let mutator = FieldContext::mutator(target);
        let nested = cx.nested(target, &quote!(inner), &cx.prefix());

        tokens.extend(quote! {
            /// Absent values are initialised with `Default::default()` first.
            #[must_use]
            pub fn #mutate(&mut self) -> #mutator<'_> {
                let inner = self
                    .inner
                    .#member
                    .get_or_insert_with(::std::default::Default::default);

                #nested
            }
        });
    }

    Ok(tokens)
}
