use super::FieldContext;
use mutlog_schema::classify::RecordRef;
use proc_macro2::TokenStream;
use quote::quote;

/// `mutate_<f>()` over the record held in place.
pub fn generate(cx: &FieldContext, target: &RecordRef) -> TokenStream {
    let member = &cx.member;
    let mutate = cx.method("mutate");
    let mutator = FieldContext::mutator(target);
    let nested = cx.nested(target, &quote!(&mut self.inner.#member), &cx.prefix());

    quote! {
        #[must_use]
        pub fn #mutate(&mut self) -> #mutator<'_> {
            #nested
        }
    }
}
